use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, sync::LazyLock};
use thiserror::Error;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};

/// Keyed by `""`; there is only ever the one listing.
pub static GLOBAL_PREVIEW_CACHE: LazyLock<DashMap<String, Vec<PostPreview>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "blog"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    excerpt: String,
    image: String,
    date: DateTime<Utc>,
    read_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostPreview {
    pub name: String,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub date: DateTime<Utc>,
    pub read_time: String,
}

impl PostPreview {
    /// e.g. `March 5, 2024`
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlogError {
    #[error("Blog post not found")]
    NotFound,
    #[error("Couldn't parse blog post {0}")]
    ParseError(String),
}

/// Caches a successful listing. A failure shows as an empty listing and stays out of the
/// cache, so the next fetch tries again.
pub fn remember_previews<E: Display>(
    cache: &DashMap<String, Vec<PostPreview>>,
    result: Result<Vec<PostPreview>, E>,
) -> Vec<PostPreview> {
    match result {
        Ok(posts) => {
            cache.insert(String::new(), posts.clone());
            posts
        }
        Err(e) => {
            log::warn!("couldn't load blog previews: {e}");
            Vec::new()
        }
    }
}

#[cfg(feature = "ssr")]
fn parse_preview(file: &str, content: &str) -> Result<PostPreview, BlogError> {
    let matter = Matter::<YAML>::new();
    let fm = matter
        .parse_with_struct::<FrontMatter>(content)
        .ok_or_else(|| BlogError::ParseError(file.to_string()))?;
    Ok(PostPreview {
        name: file.strip_suffix(".md").unwrap_or(file).to_string(),
        title: fm.data.title,
        excerpt: fm.data.excerpt,
        image: fm.data.image,
        date: fm.data.date,
        read_time: fm.data.read_time,
    })
}

#[cfg(feature = "ssr")]
fn load_preview(file: &str) -> Result<PostPreview, BlogError> {
    let asset = Assets::get(file).ok_or(BlogError::NotFound)?;
    let content = std::str::from_utf8(&asset.data)
        .map_err(|_| BlogError::ParseError(file.to_string()))?;
    parse_preview(file, content)
}

/// All embedded posts, newest first.
#[cfg(feature = "ssr")]
pub fn get_previews() -> Result<Vec<PostPreview>, BlogError> {
    let cache = &*GLOBAL_PREVIEW_CACHE;
    if let Some(r) = cache.get("") {
        return Ok(r.clone());
    }
    let mut posts = Assets::iter()
        .map(|s| load_preview(&s))
        .collect::<Result<Vec<_>, _>>()?;
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    tracing::debug!(count = posts.len(), "loaded blog previews");
    cache.insert(String::new(), posts.clone());
    Ok(posts)
}

#[cfg(test)]
mod cache_tests {
    use super::*;

    fn preview(name: &str) -> PostPreview {
        PostPreview {
            name: name.to_string(),
            title: name.to_string(),
            excerpt: String::new(),
            image: String::new(),
            date: DateTime::<Utc>::default(),
            read_time: "1 min read".to_string(),
        }
    }

    #[test]
    fn test_failed_fetch_is_not_cached() {
        let cache = DashMap::new();
        let posts = remember_previews(&cache, Err::<Vec<PostPreview>, _>(BlogError::NotFound));
        assert!(posts.is_empty());
        assert!(cache.get("").is_none());
    }

    #[test]
    fn test_successful_fetch_is_cached() {
        let cache = DashMap::new();
        let posts = remember_previews(&cache, Ok::<_, BlogError>(vec![preview("a")]));
        assert_eq!(posts.len(), 1);
        assert_eq!(cache.get("").map(|p| p.clone()), Some(posts));
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preview() {
        let content = r#"---
title: "Some Dish"
excerpt: "Short and tasty."
image: "/images/blog/dish.png"
date: 2024-03-05T00:00:00Z
read_time: "5 min read"
---
Body text.
"#;
        let post = parse_preview("some-dish.md", content).unwrap();
        assert_eq!(post.name, "some-dish");
        assert_eq!(post.title, "Some Dish");
        assert_eq!(post.read_time, "5 min read");
        assert_eq!(post.display_date(), "March 5, 2024");
    }

    #[test]
    fn test_parse_preview_missing_front_matter() {
        let res = parse_preview("broken.md", "no front matter here");
        assert_eq!(res, Err(BlogError::ParseError("broken.md".to_string())));
    }

    #[test]
    fn test_embedded_previews_sorted() {
        let posts = get_previews().unwrap();
        assert_eq!(posts.len(), 3);
        assert!(posts.windows(2).all(|w| w[0].date >= w[1].date));
        assert_eq!(posts[0].title, "The Best Ever Fish Curry");
        assert_eq!(posts[0].display_date(), "March 15, 2024");
    }

    #[test]
    fn test_missing_post() {
        assert_eq!(load_preview("nope.md"), Err(BlogError::NotFound));
    }
}
