use crate::models::{NewPost, Post};

/// Everything the page shows: the post list and the three form fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedState {
    pub posts: Vec<Post>,
    pub title: String,
    pub content: String,
    pub author: String,
}

impl FeedState {
    /// Replace the list with a fresh server listing.
    pub fn posts_loaded(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    /// Append a newly created post. Creates resolve in arrival order, so
    /// concurrent submissions may land in any order. Form fields are kept.
    pub fn post_created(&mut self, post: Post) {
        self.posts.push(post);
    }

    /// A failed list or create: reported to the console only. Takes `&self`,
    /// so the list and the form stay exactly as they were.
    pub fn request_failed(&self, error: &str) {
        log::error!(
            "{} (posts: {}, form kept)",
            error,
            self.posts.len()
        );
    }

    pub fn draft(&self) -> NewPost {
        NewPost {
            title: self.title.clone(),
            content: self.content.clone(),
            author: self.author.clone(),
        }
    }
}
