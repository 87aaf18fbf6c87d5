use shared::catalog::Catalog;
use web_sys::window;

/// Id of the optional `<script type="application/json">` element that overrides the built-in catalog.
pub const CATALOG_ELEMENT_ID: &str = "spinner-catalog";

pub fn get_asset_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(origin) = window.location().origin() {
            return origin;
        }
    }

    // Relative URLs still resolve against the page
    String::new()
}

pub fn get_asset_url(path: &str) -> String {
    resolve_asset_url(&get_asset_base_url(), path)
}

pub fn resolve_asset_url(base: &str, path: &str) -> String {
    if path.starts_with("http") || base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

/// Catalog for this session: the page-supplied one if present and valid, otherwise the default.
pub fn load_catalog() -> Catalog {
    let json = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CATALOG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    catalog_from_override(json.as_deref())
}

pub fn catalog_from_override(json: Option<&str>) -> Catalog {
    match json.map(str::trim).filter(|s| !s.is_empty()) {
        Some(json) => match Catalog::from_json(json) {
            Ok(catalog) => {
                log::info!("Using page catalog with {} items", catalog.segment_count());
                catalog
            }
            Err(e) => {
                log::warn!("Ignoring invalid page catalog: {}", e);
                Catalog::default()
            }
        },
        None => Catalog::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_asset_url() {
        assert_eq!(resolve_asset_url("", "/shoes/a.jpg"), "/shoes/a.jpg");
        assert_eq!(
            resolve_asset_url("http://127.0.0.1:8080/", "/shoes/a.jpg"),
            "http://127.0.0.1:8080/shoes/a.jpg"
        );
        assert_eq!(
            resolve_asset_url("http://127.0.0.1:8080", "https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
    }

    #[test]
    fn test_catalog_override_fallback() {
        assert_eq!(catalog_from_override(None), Catalog::default());
        assert_eq!(catalog_from_override(Some("   ")), Catalog::default());
        assert_eq!(catalog_from_override(Some("[]")), Catalog::default());
        assert_eq!(catalog_from_override(Some("oops")), Catalog::default());

        let custom = catalog_from_override(Some(
            r#"[{"id": 1, "name": "Crocs", "description": "Foam", "rating": 5.0, "image": "/crocs.jpg"}]"#,
        ));
        assert_eq!(custom.segment_count().get(), 1);
    }
}
