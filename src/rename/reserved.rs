//! Reserved-name guard.
//! Windows device names and SharePoint-blocked system files are matched
//! case-insensitively, either as the whole name or as the stem before the
//! last dot.

/// Character used to break a reserved name.
pub const FILLER: char = '_';

/// Lowercase reserved base names.
const RESERVED: &[&str] = &[
    "con", "prn", "aux", "nul", //
    "com0", "com1", "com2", "com3", "com4", "com5", "com6", "com7", "com8", "com9", //
    "lpt0", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9", //
    "desktop.ini", ".lock",
];

fn in_set(lower: &str) -> bool {
    RESERVED.contains(&lower)
}

/// Split at the last dot; `None` when there is no dot or the stem would be empty.
fn split_stem(name: &str) -> Option<(&str, &str)> {
    name.rsplit_once('.').filter(|(stem, _)| !stem.is_empty())
}

/// True if `name` (or its stem) is a reserved base name.
pub fn is_reserved(name: &str) -> bool {
    let lower = name.to_lowercase();
    if in_set(&lower) {
        return true;
    }
    split_stem(&lower).is_some_and(|(stem, _)| in_set(stem))
}

/// Break a reserved name with a single filler character.
///
/// A reserved stem gets the filler before its extension (`com1.txt` -> `com1_.txt`);
/// a reserved whole name gets it appended (`con` -> `con_`). Only one pass is made.
/// Appending to `com1.txt` would give `com1.txt_`, whose stem is still reserved.
pub fn guard_reserved(name: String) -> String {
    if let Some((stem, ext)) = split_stem(&name) {
        if in_set(&stem.to_lowercase()) {
            return format!("{stem}{FILLER}.{ext}");
        }
    }
    if in_set(&name.to_lowercase()) {
        let mut guarded = name;
        guarded.push(FILLER);
        return guarded;
    }
    name
}
