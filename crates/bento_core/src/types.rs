use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Upper bound, in characters, of the article text handed to the model.
pub const MAX_CONTENT_CHARS: usize = 3000;

/// Inbound request: either free text or a link to an article.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawInput {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub is_url: bool,
}

impl RawInput {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            is_url: false,
        }
    }

    pub fn url(url: impl Into<String>) -> Self {
        Self {
            content: Some(url.into()),
            is_url: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedArticle {
    pub title: String,
    pub author: String,
    pub body_text: String,
}

impl ExtractedArticle {
    /// Text sent to the model for an extracted article.
    pub fn model_content(&self) -> String {
        format!("{}\n\n作者：{}\n\n{}", self.title, self.author, self.body_text)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ModelRequest {
    pub system_prompt: String,
    pub user_content: String,
}

impl ModelRequest {
    pub fn new(system_prompt: impl Into<String>, user_content: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_content: user_content.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CoreNumber {
    #[serde(default, deserialize_with = "de::coerce_string")]
    pub number: String,
    #[serde(default, deserialize_with = "de::coerce_string")]
    pub desc: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SectionItem {
    #[serde(default, deserialize_with = "de::coerce_string")]
    pub label: String,
    #[serde(default, deserialize_with = "de::coerce_string")]
    pub value: String,
}

impl SectionItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Section {
    #[serde(default, deserialize_with = "de::coerce_string")]
    pub title: String,
    #[serde(default, deserialize_with = "de::list")]
    pub items: Vec<SectionItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Section {
    pub fn new(title: impl Into<String>, items: Vec<SectionItem>) -> Self {
        Self {
            title: title.into(),
            items,
            extra: Map::new(),
        }
    }

    /// Empty card used to pad sparse grids.
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn is_placeholder(&self) -> bool {
        self.title.is_empty() && self.items.is_empty() && self.extra.is_empty()
    }
}

/// The structured description of an article rendered as a bento grid.
///
/// Every field is optional because the model is free to omit any of them.
/// Keys the model adds beyond the known ones are kept in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BentoResult {
    #[serde(default, deserialize_with = "de::opt_string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string", skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "de::opt_list", skip_serializing_if = "Option::is_none")]
    pub core_numbers: Option<Vec<CoreNumber>>,
    #[serde(default, deserialize_with = "de::opt_list", skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
    #[serde(default, deserialize_with = "de::opt_list", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "de::opt_string", skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string", skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
    #[serde(default, deserialize_with = "de::opt_object", skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Lenient field readers for model-produced JSON.
mod de {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::{Map, Value};

    fn stringify(value: Value) -> String {
        match value {
            Value::String(s) => s,
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }

    pub fn coerce_string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Value>::deserialize(deserializer)?
            .map(stringify)
            .unwrap_or_default())
    }

    pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Value>::deserialize(deserializer)?.map(stringify))
    }

    pub fn opt_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Array(items)) => Some(
                items
                    .into_iter()
                    .filter_map(|item| serde_json::from_value(item).ok())
                    .collect(),
            ),
            _ => None,
        })
    }

    pub fn opt_object<'de, D>(deserializer: D) -> Result<Option<Map<String, Value>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Object(map)) => Some(map),
            _ => None,
        })
    }

    pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(opt_list(deserializer)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_items_are_coerced_to_strings() {
        let section: Section = serde_json::from_value(json!({
            "title": "亮点",
            "items": [
                { "label": "用户", "value": 42 },
                { "label": null },
                { "value": true }
            ]
        }))
        .unwrap();

        assert_eq!(section.items[0], SectionItem::new("用户", "42"));
        assert_eq!(section.items[1], SectionItem::new("", ""));
        assert_eq!(section.items[2], SectionItem::new("", "true"));
    }

    #[test]
    fn test_non_array_lists_are_ignored() {
        let result: BentoResult = serde_json::from_value(json!({
            "title": "标题",
            "sections": "not a list",
            "tags": ["a", 1, "b"],
            "coreNumbers": [{ "number": 36, "desc": "T数据" }]
        }))
        .unwrap();

        assert_eq!(result.title.as_deref(), Some("标题"));
        assert!(result.sections.is_none());
        assert_eq!(result.tags, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(result.core_numbers.unwrap()[0].number, "36");
    }

    #[test]
    fn test_unknown_keys_survive() {
        let value = json!({
            "title": "t",
            "theme": "dark",
            "sections": [{ "title": "s", "items": [], "icon": "star" }]
        });
        let result: BentoResult = serde_json::from_value(value).unwrap();
        assert_eq!(result.extra.get("theme"), Some(&json!("dark")));

        let back = serde_json::to_value(&result).unwrap();
        assert_eq!(back["sections"][0]["icon"], json!("star"));
        assert_eq!(back["theme"], json!("dark"));
        assert!(back.get("subtitle").is_none());
    }

    #[test]
    fn test_raw_input_wire_names() {
        let input: RawInput =
            serde_json::from_str(r#"{"content":"https://mp.weixin.qq.com/s/x","isUrl":true}"#).unwrap();
        assert_eq!(input, RawInput::url("https://mp.weixin.qq.com/s/x"));

        let input: RawInput = serde_json::from_str("{}").unwrap();
        assert!(input.content.is_none());
        assert!(!input.is_url);
    }

    #[test]
    fn test_model_content() {
        let article = ExtractedArticle {
            title: "标题".into(),
            author: "作者A".into(),
            body_text: "正文".into(),
        };
        assert_eq!(article.model_content(), "标题\n\n作者：作者A\n\n正文");
    }
}
