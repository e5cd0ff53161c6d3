//! Build-time configuration.
//!
//! The only external knob is the recognition service's base URL, read from
//! `SKETCH_API_URL` when the wasm bundle is compiled.

pub const DEFAULT_API_URL: &str = "http://localhost:8900";
pub const MATHJAX_SRC: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/mathjax/2.7.9/config/TeX-MML-AM_CHTML.js";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub stroke_width: f64,
    pub background: &'static str,
    /// Delay between processing a response record and showing its overlay.
    pub overlay_delay_ms: u32,
    /// Delay between an overlay change and the typeset pass.
    pub typeset_delay_ms: u32,
    pub typeset_script_src: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_api_url(DEFAULT_API_URL)
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::with_api_url(option_env!("SKETCH_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn with_api_url(url: &str) -> Self {
        let trimmed = url.trim().trim_end_matches('/');
        let api_url = if trimmed.is_empty() {
            DEFAULT_API_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self {
            api_url,
            stroke_width: 3.0,
            background: "black",
            overlay_delay_ms: 200,
            typeset_delay_ms: 100,
            typeset_script_src: MATHJAX_SRC,
        }
    }

    pub fn calculate_url(&self) -> String {
        format!("{}/calculate", self.api_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_trimmed() {
        let c = Config::with_api_url("https://calc.example.org/api//");
        assert_eq!(c.calculate_url(), "https://calc.example.org/api/calculate");
    }

    #[test]
    fn blank_url_falls_back() {
        assert_eq!(Config::with_api_url("  ").api_url, DEFAULT_API_URL);
    }

    #[test]
    fn defaults() {
        let c = Config::default();
        assert_eq!(c.stroke_width, 3.0);
        assert_eq!(c.overlay_delay_ms, 200);
        assert_eq!(c.typeset_delay_ms, 100);
    }
}
