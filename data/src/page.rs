use std::sync::LazyLock;

use fancy_regex::Regex;

use crate::fragment::Fragment;
use crate::view::View;

pub const DEFAULT_TEMPLATE: &str = include_str!("../../assets/index.html");

// Comments and `<script>`/`<style>` bodies are matched whole so tags inside
// them are never counted. Quoted attribute values may contain `>`.
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?is)<!--.*?-->"#,
        r#"|<script\b(?:"[^"]*"|'[^']*'|[^'">])*>.*?</script\s*>"#,
        r#"|<style\b(?:"[^"]*"|'[^']*'|[^'">])*>.*?</style\s*>"#,
        r#"|<(?P<close>/)?(?P<name>[a-z][a-z0-9-]*)"#,
        r#"(?P<attributes>(?:"[^"]*"|'[^']*'|[^'">])*?)(?P<self_close>/)?>"#,
    ))
    .expect("valid tag regex")
});
static ATTR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)\b([a-zA-Z_:][-a-zA-Z0-9_:.]*)\s*=\s*("[^"]*"|'[^']*'|[^\s>]+)"#,
    )
    .expect("valid attribute regex")
});

/// An HTML page with a single container element that cards are rendered
/// into.
#[derive(Debug, Clone)]
pub struct Page {
    before: String,
    after: String,
    children: Vec<Child>,
}

#[derive(Debug, Clone)]
enum Child {
    /// Content the template shipped inside the container
    Markup(String),
    Fragment(Fragment),
}

impl Child {
    fn to_html(&self) -> String {
        match self {
            Child::Markup(markup) => markup.clone(),
            Child::Fragment(fragment) => fragment.to_html(),
        }
    }
}

impl Page {
    pub fn new(template: &str, container_id: &str) -> Result<Self, Error> {
        let container = find_container(template, container_id)?;

        let inner = &template[container.inner_start..container.inner_end];
        let children = if inner.trim().is_empty() {
            vec![]
        } else {
            vec![Child::Markup(inner.to_string())]
        };

        Ok(Self {
            before: template[..container.inner_start].to_string(),
            after: template[container.inner_end..].to_string(),
            children,
        })
    }

    pub fn fragments(&self) -> impl Iterator<Item = &Fragment> {
        self.children.iter().filter_map(|child| match child {
            Child::Fragment(fragment) => Some(fragment),
            Child::Markup(_) => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn to_html(&self) -> String {
        let mut html = self.before.clone();

        for child in &self.children {
            if let Child::Fragment(_) = child {
                html.push('\n');
            }

            html.push_str(&child.to_html());
        }

        html.push_str(&self.after);

        html
    }
}

impl View for Page {
    fn clear(&mut self) {
        self.children.clear();
    }

    fn append(&mut self, fragment: Fragment) {
        self.children.push(Child::Fragment(fragment));
    }
}

struct Container {
    inner_start: usize,
    inner_end: usize,
}

fn find_container(template: &str, id: &str) -> Result<Container, Error> {
    let mut tags = TAG_REGEX.captures_iter(template).filter_map(Result::ok);

    let (name, inner_start) = tags
        .by_ref()
        .find_map(|captures| {
            let tag = captures.get(0)?;
            let name = captures.name("name")?;
            let attributes = captures.name("attributes")?;

            let is_open = captures.name("close").is_none()
                && captures.name("self_close").is_none();

            let is_container =
                id_attribute(attributes.as_str()).as_deref() == Some(id);

            (is_open && is_container)
                .then(|| (name.as_str().to_ascii_lowercase(), tag.end()))
        })
        .ok_or_else(|| Error::ContainerNotFound(id.to_string()))?;

    let mut depth = 0usize;

    for captures in tags {
        let (Some(tag), Some(tag_name)) =
            (captures.get(0), captures.name("name"))
        else {
            continue;
        };

        if !tag_name.as_str().eq_ignore_ascii_case(&name) {
            continue;
        }

        if captures.name("close").is_some() {
            if depth == 0 {
                return Ok(Container {
                    inner_start,
                    inner_end: tag.start(),
                });
            }

            depth -= 1;
        } else if captures.name("self_close").is_none() {
            depth += 1;
        }
    }

    Err(Error::UnclosedContainer(id.to_string()))
}

fn id_attribute(attributes: &str) -> Option<String> {
    ATTR_REGEX
        .captures_iter(attributes)
        .filter_map(Result::ok)
        .find_map(|captures| {
            let key = captures.get(1)?.as_str();
            let value = captures.get(2)?.as_str();

            key.eq_ignore_ascii_case("id").then(|| {
                value
                    .trim_start_matches(['\'', '"'])
                    .trim_end_matches(['\'', '"'])
                    .to_string()
            })
        })
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("no element with id `{0}` in template")]
    ContainerNotFound(String),
    #[error("element with id `{0}` is never closed")]
    UnclosedContainer(String),
}
