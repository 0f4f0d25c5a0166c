use std::fmt;

/// The content types the seeder writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentType {
    Tag,
    Author,
    BlogPost,
}

impl ContentType {
    /// Store-qualified identifier of the content type.
    pub fn uid(self) -> &'static str {
        match self {
            Self::Tag => "api::tag.tag",
            Self::Author => "api::author.author",
            Self::BlogPost => "api::blog-post.blog-post",
        }
    }

    /// Qualified permission action, e.g. `api::tag.tag.find`.
    pub fn action(self, action: Action) -> String {
        format!("{}.{}", self.uid(), action.name())
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uid())
    }
}

/// Read actions that can be granted on a content type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Find,
    FindOne,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::FindOne => "findOne",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_actions() {
        assert_eq!(ContentType::Tag.action(Action::Find), "api::tag.tag.find");
        assert_eq!(
            ContentType::BlogPost.action(Action::FindOne),
            "api::blog-post.blog-post.findOne"
        );
        assert_eq!(ContentType::Author.to_string(), "api::author.author");
    }
}
