//! Immutable per-call configuration consumed by the parser and by external
//! renderers. Built once via [`Options::builder`] and cloned freely — no
//! interior mutability, per §4.4.

use crate::parser::Entity;
use std::sync::Arc;

type ValidateFn = Arc<dyn Fn(&Entity) -> bool + Send + Sync>;
type RenderFn = Arc<dyn Fn(&Entity) -> String + Send + Sync>;

#[derive(Clone)]
pub struct Options {
    pub default_protocol: String,
    pub detect_email: bool,
    pub nl2br: bool,
    pub ignore_tags: Vec<String>,
    pub validate: Option<ValidateFn>,
    pub render: Option<RenderFn>,
    pub tag_name: String,
    pub attributes: Vec<(String, String)>,
    pub class_name: Option<String>,
    pub target: Option<String>,
    pub rel: Option<String>,
    pub format: Option<Arc<dyn Fn(&Entity) -> String + Send + Sync>>,
    pub format_href: Option<Arc<dyn Fn(&Entity) -> String + Send + Sync>>,
    pub truncate: Option<usize>,
}

impl std::fmt::Debug for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("default_protocol", &self.default_protocol)
            .field("detect_email", &self.detect_email)
            .field("nl2br", &self.nl2br)
            .field("ignore_tags", &self.ignore_tags)
            .field("validate", &self.validate.is_some())
            .field("render", &self.render.is_some())
            .field("tag_name", &self.tag_name)
            .field("attributes", &self.attributes)
            .field("class_name", &self.class_name)
            .field("target", &self.target)
            .field("rel", &self.rel)
            .field("format", &self.format.is_some())
            .field("format_href", &self.format_href.is_some())
            .field("truncate", &self.truncate)
            .finish()
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            default_protocol: "http".to_string(),
            detect_email: true,
            nl2br: false,
            ignore_tags: Vec::new(),
            validate: None,
            render: None,
            tag_name: "a".to_string(),
            attributes: Vec::new(),
            class_name: None,
            target: None,
            rel: None,
            format: None,
            format_href: None,
            truncate: None,
        }
    }
}

impl Options {
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder(Options::default())
    }

    /// Validate the `default_protocol` field against the same scheme
    /// syntax rules as `register_custom_protocol` (§4.5): an option value is
    /// one of the few ways user input reaches the error surface (§7).
    pub fn validate_fields(&self) -> Result<(), crate::error::Error> {
        crate::schemes::validate_scheme_syntax(&self.default_protocol).map_err(|reason| {
            crate::error::Error::InvalidOptionValue {
                field: "default_protocol",
                reason,
            }
        })
    }
}

/// Builder for [`Options`]; every setter takes `self` by value so calls
/// chain fluently.
pub struct OptionsBuilder(Options);

impl OptionsBuilder {
    pub fn default_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.0.default_protocol = protocol.into();
        self
    }

    pub fn detect_email(mut self, enabled: bool) -> Self {
        self.0.detect_email = enabled;
        self
    }

    pub fn nl2br(mut self, enabled: bool) -> Self {
        self.0.nl2br = enabled;
        self
    }

    pub fn ignore_tags(mut self, tags: Vec<String>) -> Self {
        self.0.ignore_tags = tags;
        self
    }

    pub fn validate(mut self, f: impl Fn(&Entity) -> bool + Send + Sync + 'static) -> Self {
        self.0.validate = Some(Arc::new(f));
        self
    }

    pub fn render(mut self, f: impl Fn(&Entity) -> String + Send + Sync + 'static) -> Self {
        self.0.render = Some(Arc::new(f));
        self
    }

    pub fn tag_name(mut self, name: impl Into<String>) -> Self {
        self.0.tag_name = name.into();
        self
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.attributes.push((key.into(), value.into()));
        self
    }

    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        self.0.class_name = Some(name.into());
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.0.target = Some(target.into());
        self
    }

    pub fn rel(mut self, rel: impl Into<String>) -> Self {
        self.0.rel = Some(rel.into());
        self
    }

    pub fn format(mut self, f: impl Fn(&Entity) -> String + Send + Sync + 'static) -> Self {
        self.0.format = Some(Arc::new(f));
        self
    }

    pub fn format_href(mut self, f: impl Fn(&Entity) -> String + Send + Sync + 'static) -> Self {
        self.0.format_href = Some(Arc::new(f));
        self
    }

    pub fn truncate(mut self, len: usize) -> Self {
        self.0.truncate = Some(len);
        self
    }

    pub fn build(self) -> Options {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_protocol_is_http() {
        assert_eq!(Options::default().default_protocol, "http");
        assert!(Options::default().detect_email);
    }

    #[test]
    fn builder_chains_fields() {
        let opts = Options::builder()
            .default_protocol("https")
            .detect_email(false)
            .tag_name("span")
            .truncate(40)
            .build();
        assert_eq!(opts.default_protocol, "https");
        assert!(!opts.detect_email);
        assert_eq!(opts.tag_name, "span");
        assert_eq!(opts.truncate, Some(40));
    }

    #[test]
    fn validate_callback_runs() {
        let opts = Options::builder().validate(|e| e.value.len() > 3).build();
        assert!(opts.validate.as_ref().unwrap()(&Entity {
            tag: crate::parser::EntityTag::Text,
            value: "abcd".to_string(),
            start: 0,
            end: 4,
            is_link: false,
            href: String::new(),
            sub_tokens: vec![],
        }));
    }
}
