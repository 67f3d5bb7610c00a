//! Test data model for the fake feed server
//!
//! Provides a builder-style API for constructing Atom feed bodies:
//!
//! ```ignore
//! let body = FeedBuilder::new()
//!     .fullcount(2)
//!     .entry("Alice", "alice@x.com", "Hello")
//!     .entry("Bob", "bob@example.com", "Re: lunch")
//!     .build();
//! ```
//!
//! The produced XML matches the fixed Gmail schema: all elements in
//! the `http://purl.org/atom/ns#` namespace, scalar fields at the
//! root, entries as direct children of the root.

/// What the fake server serves: accepted credentials plus the body
/// handed back on a successful request.
#[derive(Debug, Clone)]
pub struct ServedFeed {
    pub username: String,
    pub password: String,
    pub body: String,
}

impl ServedFeed {
    pub fn new(username: &str, password: &str, body: impl Into<String>) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            body: body.into(),
        }
    }
}

/// One entry of the generated feed.
#[derive(Debug, Clone)]
struct TestEntry {
    name: String,
    email: String,
    title: String,
}

/// Builder for a schema-complete Atom feed body.
pub struct FeedBuilder {
    title: String,
    tagline: String,
    fullcount: u32,
    modified: String,
    entries: Vec<TestEntry>,
}

impl FeedBuilder {
    pub fn new() -> Self {
        Self {
            title: "Gmail - Inbox for alice@gmail.com".to_string(),
            tagline: "New messages in your Gmail Inbox".to_string(),
            fullcount: 0,
            modified: "2011-04-01T12:00:00Z".to_string(),
            entries: Vec::new(),
        }
    }

    /// Override the reported unread count. Independent of how many
    /// entries are added.
    pub fn fullcount(mut self, fullcount: u32) -> Self {
        self.fullcount = fullcount;
        self
    }

    /// Add an entry; summary, issued, and id are derived from the
    /// title.
    pub fn entry(mut self, name: &str, email: &str, title: &str) -> Self {
        self.entries.push(TestEntry {
            name: name.to_string(),
            email: email.to_string(),
            title: title.to_string(),
        });
        self
    }

    /// Produce the XML body.
    pub fn build(self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <feed version=\"0.3\" xmlns=\"http://purl.org/atom/ns#\">",
        );
        xml.push_str(&format!("<title>{}</title>", self.title));
        xml.push_str(&format!("<tagline>{}</tagline>", self.tagline));
        xml.push_str(&format!("<fullcount>{}</fullcount>", self.fullcount));
        xml.push_str(
            "<link rel=\"alternate\" href=\"https://mail.google.com/mail\" type=\"text/html\"/>",
        );
        xml.push_str(&format!("<modified>{}</modified>", self.modified));

        for (i, entry) in self.entries.iter().enumerate() {
            xml.push_str(&format!(
                "<entry>\
                 <title>{title}</title>\
                 <summary>Summary of {title}</summary>\
                 <issued>2011-04-01T10:0{i}:00Z</issued>\
                 <id>tag:gmail.google.com,2004:{i}</id>\
                 <author><name>{name}</name><email>{email}</email></author>\
                 </entry>",
                title = entry.title,
                name = entry.name,
                email = entry.email,
            ));
        }

        xml.push_str("</feed>");
        xml
    }
}
