use itertools::Itertools;

/// Longest first, so `co., ltd.` wins over a bare `ltd.`.
const CORPORATE_SUFFIXES: &[&str] = &[
    "co., ltd.",
    "co., ltd",
    "co.,ltd.",
    "co. ltd.",
    "corporation",
    "(the)",
    "corp.",
    "corp",
    "inc.",
    "inc",
    "ltd.",
    "ltd",
    "llc",
    "plc",
];

const JAPANESE_MARKERS: &[&str] = &["株式会社", "有限会社", "合同会社", "ホールディングス", "銀行", "証券"];

const JAPANESE_COMPANIES: &[&str] = &[
    "rakuten",
    "softbank",
    "sony",
    "toyota",
    "honda",
    "nintendo",
    "mercari",
    "line",
    "dena",
    "gree",
    "cyberagent",
    "cookpad",
    "smartnews",
    "wantedly",
    "sansan",
    "m3",
    "kaizen platform",
    "fast retailing",
    "preferred networks",
    "cybozu",
    "globis",
    "dentsu",
    "nomura",
    "recruit",
    "kakaku",
    "moneyforward",
    "pixiv",
    "gmo",
    "dmm",
    "dwango",
    "gungho",
    "gunosy",
    "bizreach",
    "hitachi",
    "panasonic",
    "toshiba",
    "fujitsu",
    "nec",
    "sharp",
    "canon",
    "nikon",
    "mitsubishi",
    "mitsui",
    "sumitomo",
    "mizuho",
    "sony interactive entertainment",
];

/// Collapses whitespace runs (NBSP and full-width spaces included) into a
/// single ASCII space and trims both ends.
pub fn normalize_text(s: &str) -> String {
    s.split_whitespace().join(" ")
}

pub fn is_normalized(s: &str) -> bool {
    normalize_text(s) == s
}

/// Identity used to spot the same company written two ways, e.g.
/// `Apple Inc.` and `apple`.
pub fn company_key(name: &str) -> String {
    let mut key = normalize_text(name).to_lowercase();
    loop {
        let trimmed = key.trim_end_matches([' ', ',']);
        let stripped = CORPORATE_SUFFIXES.iter().find_map(|suffix| {
            let rest = trimmed.strip_suffix(suffix)?;
            rest.ends_with([' ', ',']).then_some(rest)
        });
        match stripped {
            Some(rest) => key = rest.to_string(),
            None => return trimmed.to_string(),
        }
    }
}

pub fn looks_japanese(name: &str) -> bool {
    let key = company_key(name);
    JAPANESE_COMPANIES.contains(&key.as_str())
        || JAPANESE_MARKERS.iter().any(|marker| name.contains(marker))
}
