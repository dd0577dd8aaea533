//! An ordered list of posts indexed by id.

use std::collections::HashMap;

use crate::models::{LikeResult, Post};

/// Posts in display order, with an id index for in-place patches.
///
/// If the server ever returns the same id twice, the first occurrence is the
/// one that gets patched or removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostList {
    posts: Vec<Post>,
    index: HashMap<String, usize>,
}

impl PostList {
    pub fn new(posts: Vec<Post>) -> Self {
        let mut list = Self {
            posts,
            index: HashMap::new(),
        };
        list.reindex();
        list
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (i, post) in self.posts.iter().enumerate() {
            self.index.entry(post.id.clone()).or_insert(i);
        }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }

    pub fn as_slice(&self) -> &[Post] {
        &self.posts
    }

    pub fn contains(&self, post_id: &str) -> bool {
        self.index.contains_key(post_id)
    }

    pub fn get(&self, post_id: &str) -> Option<&Post> {
        self.index.get(post_id).map(|&i| &self.posts[i])
    }

    pub fn get_mut(&mut self, post_id: &str) -> Option<&mut Post> {
        let i = *self.index.get(post_id)?;
        self.posts.get_mut(i)
    }

    /// Copy the server's like state onto a post. Returns false if the post
    /// is not in the list.
    pub fn apply_like(&mut self, post_id: &str, result: &LikeResult) -> bool {
        match self.get_mut(post_id) {
            Some(post) => {
                post.apply_like(result);
                true
            }
            None => false,
        }
    }

    /// Remove a post by id, keeping the order of the rest.
    pub fn remove(&mut self, post_id: &str) -> Option<Post> {
        let i = self.index.remove(post_id)?;
        let removed = self.posts.remove(i);
        self.reindex();
        Some(removed)
    }
}

impl<'a> IntoIterator for &'a PostList {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.iter()
    }
}
