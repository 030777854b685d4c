use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::json::display_value;

/// A product record as cached from the storefront API. The keys the
/// inspector reads are kept as raw JSON so their types are only checked
/// where a value is used; everything else lands in `extra`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Product {
    #[serde(default)]
    pub id: Option<Value>,

    #[serde(default)]
    pub name: Option<Value>,

    #[serde(default)]
    pub slug: Option<Value>,

    #[serde(default)]
    pub category: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One element of a cached listing. Anything that is not a JSON object is
/// kept as-is and only rejected when a step needs to read its keys.
#[derive(Debug, Clone)]
pub enum Record {
    Product(Product),
    Other(Value),
}

pub type Catalog = Vec<Record>;

impl Record {
    pub fn from_value(v: Value) -> Result<Self, serde_json::Error> {
        if v.is_object() {
            serde_json::from_value(v).map(Record::Product)
        } else {
            Ok(Record::Other(v))
        }
    }

    pub fn as_product(&self) -> Option<&Product> {
        match self {
            Record::Product(p) => Some(p),
            Record::Other(_) => None,
        }
    }
}

impl Product {
    pub fn category_label(&self) -> String {
        self.category
            .as_ref()
            .map(display_value)
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn slug_is(&self, slug: &str) -> bool {
        self.slug.as_ref().and_then(Value::as_str) == Some(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_keys_are_kept() {
        let p: Product = serde_json::from_value(json!({
            "id": 12,
            "name": "Band",
            "slug": "band",
            "price": "19.90"
        }))
        .unwrap();

        assert_eq!(p.id, Some(json!(12)));
        assert_eq!(p.extra.get("price"), Some(&json!("19.90")));
        assert_eq!(p.category_label(), "N/A");
    }

    #[test]
    fn any_value_types_are_accepted() {
        let p: Product =
            serde_json::from_value(json!({"name": 123, "slug": ["x"], "category": {"id": 4}}))
                .unwrap();
        assert_eq!(p.name, Some(json!(123)));
        assert!(!p.slug_is("x"));
        assert_eq!(p.category_label(), r#"{"id":4}"#);
    }

    #[test]
    fn missing_keys_do_not_fail_parsing() {
        let p: Product = serde_json::from_value(json!({})).unwrap();
        assert!(p.name.is_none());
        assert!(p.slug.is_none());
    }

    #[test]
    fn non_objects_become_other_records() {
        let r = Record::from_value(json!("stray")).unwrap();
        assert!(r.as_product().is_none());

        let r = Record::from_value(json!({"slug": "band"})).unwrap();
        assert!(r.as_product().is_some_and(|p| p.slug_is("band")));
    }

    #[test]
    fn category_prints_bare() {
        let p: Product = serde_json::from_value(json!({"category": "Wearables"})).unwrap();
        assert_eq!(p.category_label(), "Wearables");
    }
}
