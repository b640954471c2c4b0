// WASM bindings for the spelling engine.
//
// Provides a `WasmSpelling` class exported via wasm-bindgen that wraps a
// `Dictionary`. Results are plain JavaScript objects built with
// serde-wasm-bindgen; absent fields are omitted rather than set to null.
//
// Usage from JavaScript:
//
//   const dict = new WasmSpelling("hello 500 help 200");   // or ["a", "b"]
//   dict.insert("hell", 400);
//   dict.lookup("hel");             // => { found: false, word: "hel", suggestions: [...] }
//   dict.lookup(["hello", "x"]);    // => [{ found: true, word: "hello", rank: 500 }, ...]
//   dict.lookup("hel", { suggest: false, suggestionsLimit: 5 });
//   dict.remove("hell");
//   dict.search("he", { depth: 2 }); // => [{ word: "help", rank: 200 }, ...]

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use spelling::{Dictionary, LookupOptions, LookupResult, RankedWord, SearchOptions};

// ============================================================================
// Serde DTO types for JS interop
// ============================================================================

/// Serializable representation of a lookup result.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsLookupResult {
    found: bool,
    word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    rank: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestions: Option<Vec<JsSuggestion>>,
}

/// A suggestion is always a found word.
#[derive(Debug, PartialEq, Serialize)]
struct JsSuggestion {
    found: bool,
    word: String,
    rank: u32,
}

#[derive(Debug, PartialEq, Serialize)]
struct JsRankedWord {
    word: String,
    rank: u32,
}

/// Options accepted by `lookup`. Missing fields keep their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct JsLookupOptions {
    suggest: Option<bool>,
    suggestions_limit: Option<usize>,
    max_cost: Option<usize>,
}

/// Options accepted by `search`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct JsSearchOptions {
    depth: Option<usize>,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn to_js_result(result: LookupResult) -> JsLookupResult {
    JsLookupResult {
        found: result.found,
        word: result.word,
        rank: result.rank,
        suggestions: result.suggestions.map(|list| {
            list.into_iter()
                .map(|s| JsSuggestion {
                    found: true,
                    word: s.word,
                    rank: s.rank,
                })
                .collect()
        }),
    }
}

fn to_js_ranked(words: Vec<RankedWord>) -> Vec<JsRankedWord> {
    words
        .into_iter()
        .map(|w| JsRankedWord {
            word: w.word,
            rank: w.rank,
        })
        .collect()
}

impl From<JsLookupOptions> for LookupOptions {
    fn from(js: JsLookupOptions) -> Self {
        let defaults = LookupOptions::default();
        LookupOptions {
            suggest: js.suggest.unwrap_or(defaults.suggest),
            suggestions_limit: js.suggestions_limit.unwrap_or(defaults.suggestions_limit),
            max_cost: js.max_cost.unwrap_or(defaults.max_cost),
        }
    }
}

impl From<JsSearchOptions> for SearchOptions {
    fn from(js: JsSearchOptions) -> Self {
        js.depth
            .map(SearchOptions::with_depth)
            .unwrap_or_default()
    }
}

/// Render a JS number as a rank token. Fractions, negatives and NaN are
/// kept as-is so that rank parsing rejects them.
fn rank_token(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Text of a word argument. Strings pass through; numbers and booleans are
/// rendered the way JavaScript prints them.
fn word_text(value: &JsValue) -> Result<String, JsError> {
    if let Some(text) = value.as_string() {
        Ok(text)
    } else if let Some(number) = value.as_f64() {
        Ok(number_text(number))
    } else if let Some(flag) = value.as_bool() {
        Ok(flag.to_string())
    } else {
        Err(JsError::new("words must be strings or numbers"))
    }
}

fn number_text(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn is_absent(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}

fn to_js_error(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

fn options_from<T: Default + for<'de> Deserialize<'de>>(value: JsValue) -> Result<T, JsError> {
    if is_absent(&value) {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(to_js_error)
}

// ============================================================================
// WasmSpelling
// ============================================================================

/// Ranked spelling dictionary for WebAssembly.
///
/// Provides lookup with correction suggestions and prefix search.
#[wasm_bindgen]
pub struct WasmSpelling {
    dict: Dictionary,
}

#[wasm_bindgen]
impl WasmSpelling {
    /// Create a dictionary, optionally seeded.
    ///
    /// - a string is read as alternating `word rank` tokens
    /// - an array is read as a list of words, each with an implicit rank
    #[wasm_bindgen(constructor)]
    pub fn new(seed: JsValue) -> Result<WasmSpelling, JsError> {
        let dict = if is_absent(&seed) {
            Dictionary::new()
        } else if let Some(text) = seed.as_string() {
            Dictionary::from_text(&text).map_err(to_js_error)?
        } else if js_sys::Array::is_array(&seed) {
            let words = js_sys::Array::from(&seed)
                .iter()
                .map(|w| {
                    w.as_string()
                        .ok_or_else(|| JsError::new("dictionary words must be strings"))
                })
                .collect::<Result<Vec<String>, JsError>>()?;
            Dictionary::from_words(&words).map_err(to_js_error)?
        } else {
            return Err(JsError::new("dictionary seed must be a string or an array"));
        };
        Ok(WasmSpelling { dict })
    }

    /// Insert a word, or update its rank.
    ///
    /// Without a rank the word's count goes up by one. Throws if the word is
    /// missing or the rank is not a non-negative integer.
    pub fn insert(&mut self, word: JsValue, rank: JsValue) -> Result<(), JsError> {
        let word = if is_absent(&word) {
            None
        } else {
            Some(
                word.as_string()
                    .ok_or_else(|| JsError::new("word must be a string"))?,
            )
        };
        let rank = if is_absent(&rank) {
            None
        } else {
            let value = rank
                .as_f64()
                .ok_or_else(|| JsError::new("word's rank must be a number"))?;
            Some(rank_token(value))
        };
        self.dict
            .insert_raw(word.as_deref(), rank.as_deref())
            .map_err(to_js_error)?;
        Ok(())
    }

    /// Look up a word, or an array of words.
    ///
    /// Options: `{ suggest?: boolean, suggestionsLimit?: number, maxCost?: number }`.
    pub fn lookup(&self, word: JsValue, opts: JsValue) -> Result<JsValue, JsError> {
        let options: LookupOptions = options_from::<JsLookupOptions>(opts)?.into();

        if js_sys::Array::is_array(&word) {
            let words = js_sys::Array::from(&word)
                .iter()
                .map(|w| word_text(&w))
                .collect::<Result<Vec<String>, JsError>>()?;
            let results: Vec<JsLookupResult> = self
                .dict
                .lookup_all(&words, &options)
                .into_iter()
                .map(to_js_result)
                .collect();
            return serde_wasm_bindgen::to_value(&results).map_err(to_js_error);
        }

        let word = word_text(&word)?;
        let result = to_js_result(self.dict.lookup(&word, &options));
        serde_wasm_bindgen::to_value(&result).map_err(to_js_error)
    }

    /// Remove a word. Unknown words are ignored.
    pub fn remove(&mut self, word: &str) {
        self.dict.remove(word);
    }

    /// List known words starting with `prefix`, best rank first.
    ///
    /// Options: `{ depth?: number }` (default 3).
    pub fn search(&self, prefix: &str, opts: JsValue) -> Result<JsValue, JsError> {
        let options: SearchOptions = options_from::<JsSearchOptions>(opts)?.into();
        let results = to_js_ranked(self.dict.search(prefix, &options));
        serde_wasm_bindgen::to_value(&results).map_err(to_js_error)
    }

    /// Number of stored words.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.dict.len()
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        Dictionary::get_version().to_string()
    }
}
