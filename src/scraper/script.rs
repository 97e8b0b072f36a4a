use crate::scraper::ScraperConfig;

/// JavaScript run in the page to read the image and price elements.
pub struct ProbeScript {
    source: String,
}

impl ProbeScript {
    pub fn new(config: &ScraperConfig) -> Self {
        let image_selector = js_string(&config.image_selector);
        let price_selector = js_string(&config.price_selector);

        // getAttribute keeps site-relative paths as written
        let source = format!(
            r#"
            (() => {{
                const img = document.querySelector({image_selector});
                const price = document.querySelector({price_selector});
                return {{
                    image_src: img ? img.getAttribute('src') : null,
                    price_value: price ? price.getAttribute('value') : null,
                    price_text: price ? price.innerText : null
                }};
            }})()
            "#
        );

        Self { source }
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

fn js_string(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_uses_configured_selectors() {
        let config = ScraperConfig::default();
        let script = ProbeScript::new(&config);

        assert!(script.source().contains("'img.rounded-t-lg'"));
        assert!(script
            .source()
            .contains("'data.text-lg.text-green-500, data.text-lg.text-green-600'"));
        assert!(script.source().contains("image_src"));
        assert!(script.source().contains("price_value"));
    }

    #[test]
    fn test_selector_quotes_are_escaped() {
        let config = ScraperConfig {
            image_selector: "img[alt='car']".to_string(),
            ..Default::default()
        };
        let script = ProbeScript::new(&config);
        assert!(script.source().contains(r"'img[alt=\'car\']'"));
    }
}
