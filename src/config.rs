use std::path::PathBuf;
use std::time::Duration;

pub const CATALOG_FILE: &str = "api_products.json";
pub const SLUG_MARKER: &str = "smorfit";
pub const TARGET_SLUG: &str = "smorfit-smart-watch-for-men-women-fitness-tracker-for-andriod";
pub const PREVIEW_COUNT: usize = 3;

pub const PRODUCTS_ENDPOINT: &str = "http://localhost:3001/api/woocommerce/products";
pub const PER_PAGE: u32 = 1;
pub const PRODUCT_FIELDS: &str = "id,name,slug,price,regular_price,sale_price,average_rating,stock_quantity,manage_stock,images,images.src,short_description,description,categories,attributes,tags,date_created,meta_data";
pub const TIMEOUT_SECS: u64 = 10;
pub const ERROR_SNIPPET_CHARS: usize = 500;

#[derive(Debug, Clone)]
pub struct InspectConfig {
    pub path: PathBuf,
    pub marker: String,
    pub target_slug: String,
}

impl Default for InspectConfig {
    fn default() -> Self {
        InspectConfig {
            path: PathBuf::from(CATALOG_FILE),
            marker: SLUG_MARKER.to_string(),
            target_slug: TARGET_SLUG.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub endpoint: String,
    pub slug: String,
    pub per_page: u32,
    pub fields: String,
    pub timeout: Duration,
}

impl ProbeConfig {
    /// Query pairs in the order the endpoint receives them.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("slug", self.slug.clone()),
            ("per_page", self.per_page.to_string()),
            ("_fields", self.fields.clone()),
        ]
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ProbeConfig {
            endpoint: PRODUCTS_ENDPOINT.to_string(),
            slug: TARGET_SLUG.to_string(),
            per_page: PER_PAGE,
            fields: PRODUCT_FIELDS.to_string(),
            timeout: Duration::from_secs(TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_defaults_match_fixed_request() {
        let cfg = ProbeConfig::default();
        let params = cfg.params();

        assert_eq!(params[0], ("slug", TARGET_SLUG.to_string()));
        assert_eq!(params[1], ("per_page", "1".to_string()));
        assert_eq!(params[2].0, "_fields");
        assert!(params[2].1.starts_with("id,name,slug,price"));
        assert!(params[2].1.ends_with("date_created,meta_data"));
        assert_eq!(cfg.timeout, Duration::from_secs(10));
    }

    #[test]
    fn inspect_defaults_point_at_cached_file() {
        let cfg = InspectConfig::default();
        assert_eq!(cfg.path, PathBuf::from("api_products.json"));
        assert!(cfg.target_slug.contains(&cfg.marker));
    }
}
