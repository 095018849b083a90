//! Feature Document Parser
//!
//! Loads [`Feature`] trees from:
//! - standalone YAML files (the feature at the root, or under a `feature:` key)
//! - Markdown files with fenced ```` ```yaml ```` blocks carrying a root
//!   `feature:` key

use crate::models::Feature;
use anyhow::{bail, Context, Result};
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct FeatureBlockWrapper {
    feature: Feature,
}

/// Parse a YAML feature document
///
/// Accepts the feature at the document root or wrapped in a `feature:` key.
pub fn parse_feature(yaml: &str) -> Result<Feature> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml).context("Invalid YAML in feature document")?;

    if value.get("feature").is_some() {
        let wrapper: FeatureBlockWrapper =
            serde_yaml::from_value(value).context("Failed to parse feature document")?;
        return Ok(wrapper.feature);
    }

    serde_yaml::from_value(value).context("Failed to parse feature document")
}

/// Extract every feature from fenced YAML blocks in a Markdown document
///
/// YAML blocks without a root `feature:` key are skipped. A block that
/// has one but does not deserialize is an error.
pub fn extract_feature_blocks(markdown: &str) -> Result<Vec<Feature>> {
    let parser = Parser::new_ext(markdown, Options::empty()).into_offset_iter();
    let mut features = Vec::new();
    let mut current_block: Option<(usize, String)> = None; // (line, content)

    for (event, range) in parser {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                if info.starts_with("yaml") || info.starts_with("yml") {
                    let line = markdown[..range.start].matches('\n').count() + 1;
                    current_block = Some((line, String::new()));
                }
            }
            Event::Text(text) => {
                if let Some((_, ref mut content)) = current_block {
                    content.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((line, content)) = current_block.take() {
                    if let Some(feature) = parse_feature_block(&content, line)? {
                        features.push(feature);
                    }
                }
            }
            _ => {}
        }
    }

    Ok(features)
}

fn parse_feature_block(content: &str, line: usize) -> Result<Option<Feature>> {
    let value = match serde_yaml::from_str::<serde_yaml::Value>(content) {
        Ok(value) => value,
        Err(e) => {
            // Only worth a warning if it looks like it was meant to be a feature
            if content.contains("feature:") {
                tracing::warn!(line, error = %e, "skipping invalid YAML in potential feature block");
            }
            return Ok(None);
        }
    };

    if value.get("feature").is_none() {
        tracing::debug!(line, "skipping YAML block without a feature key");
        return Ok(None);
    }

    let wrapper: FeatureBlockWrapper = serde_yaml::from_value(value)
        .with_context(|| format!("Failed to parse feature block at line {}", line))?;
    Ok(Some(wrapper.feature))
}

/// Load all features from a `.yaml`/`.yml` or `.md` file
pub fn load_features(path: &Path) -> Result<Vec<Feature>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read feature file: {}", path.display()))?;

    let is_markdown = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("md"))
        .unwrap_or(false);

    if !is_markdown {
        let feature = parse_feature(&content)
            .with_context(|| format!("Failed to load feature from {}", path.display()))?;
        return Ok(vec![feature]);
    }

    let features = extract_feature_blocks(&content)
        .with_context(|| format!("Failed to load features from {}", path.display()))?;
    if features.is_empty() {
        bail!("No feature blocks found in {}", path.display());
    }
    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEATURE_YAML: &str = r#"
describe: wishHappyBirthday
groups:
  - describe: 'Given a name "Lisky"'
    before_each: a_name
    groups:
      - describe: 'Given a language "English"'
        before_each: a_language
        cases:
          - it: 'Then it should return "Happy birthday, Lisky!"'
            then: it_should_return
"#;

    #[test]
    fn test_parse_feature_at_root() {
        let feature = parse_feature(FEATURE_YAML).unwrap();
        assert_eq!(feature.describe, "wishHappyBirthday");
        assert_eq!(feature.groups[0].before_each.as_deref(), Some("a_name"));
        assert_eq!(feature.groups[0].groups[0].cases[0].then, "it_should_return");
    }

    #[test]
    fn test_parse_wrapped_feature() {
        let yaml = r#"
feature:
  describe: wishHappyBirthday
"#;
        let feature = parse_feature(yaml).unwrap();
        assert_eq!(feature.describe, "wishHappyBirthday");
        assert!(feature.groups.is_empty());
    }

    #[test]
    fn test_parse_feature_rejects_run_options() {
        // Features only declare fixtures; how they run is up to the test runner.
        let yaml = r#"
describe: wishHappyBirthday
settings:
  fail_fast: true
"#;
        let err = parse_feature(yaml).unwrap_err();
        assert!(format!("{:#}", err).contains("settings"));
    }

    #[test]
    fn test_parse_group_rejects_unknown_keys() {
        let yaml = r#"
describe: wishHappyBirthday
groups:
  - describe: 'Given a name "Lisky"'
    before_all: a_name
"#;
        let err = parse_feature(yaml).unwrap_err();
        assert!(format!("{:#}", err).contains("before_all"));
    }

    #[test]
    fn test_parse_feature_missing_describe() {
        let err = parse_feature("groups: []").unwrap_err();
        assert!(format!("{:#}", err).contains("describe"));
    }

    #[test]
    fn test_extract_skips_unrelated_blocks() {
        let markdown = r#"# Birthday greetings

```yaml
other: value
```

```rust
let feature = "describe: nope";
```

```yaml
feature:
  describe: wishHappyBirthday
```
"#;
        let features = extract_feature_blocks(markdown).unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].describe, "wishHappyBirthday");
    }

    #[test]
    fn test_extract_reports_block_line() {
        let markdown = "# Title\n\n```yaml\nfeature:\n  groups: []\n```\n";
        let err = extract_feature_blocks(markdown).unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_extract_skips_invalid_yaml() {
        let markdown = "```yaml\nfeature: [unclosed\n```\n";
        assert!(extract_feature_blocks(markdown).unwrap().is_empty());
    }
}
