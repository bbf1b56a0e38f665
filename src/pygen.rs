// src/pygen.rs

// Renders the generated Python module. Pure text assembly: same table
// in, same bytes out.

use crate::scrape::FunctionSet;

const HEADER: &str = "\
#
# For calling aggressor functions
#
# Warning: This file is auto-generated by ag_scrape
#

import communicate

";

/// The page names some functions with characters Python identifiers
/// can't carry ("-is64"). The identifier drops every hyphen; dispatch
/// still uses the original name.
pub fn py_ident(name: &str) -> String {
    name.replace('-', "")
}

/// One wrapper stub per entry, in table order, doc comment (when the
/// page had one) sitting directly above its def.
pub fn render(set: &FunctionSet) -> String {
    let mut out = s!(HEADER);

    for entry in set.iter() {
        if let Some(doc) = &entry.doc {
            out.push_str(doc);
        }
        out.push_str(&format!(
            "\ndef {}(*args):\n    return communicate.call('{}', args)\n\n",
            py_ident(&entry.name),
            entry.name
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::FunctionSet;

    fn sample_set() -> FunctionSet {
        let mut set = FunctionSet::new();
        set.set("-is64", Some(s!("# Checks if x64.\n# Args: none.")));
        set.set("print", None);
        set
    }

    #[test]
    fn ident_strips_all_hyphens() {
        assert_eq!(py_ident("-is64"), "is64");
        assert_eq!(py_ident("openOrActivate"), "openOrActivate");
        assert_eq!(py_ident("-a-b-"), "ab");
    }

    #[test]
    fn stub_uses_stripped_ident_and_original_dispatch_key() {
        let out = render(&sample_set());
        assert!(out.contains("def is64(*args):"));
        assert!(out.contains("    return communicate.call('-is64', args)"));
        // the hyphenated form never appears as an identifier
        assert!(!out.contains("def -is64"));
    }

    #[test]
    fn doc_block_sits_directly_above_its_def() {
        let out = render(&sample_set());
        assert!(out.contains("# Checks if x64.\n# Args: none.\ndef is64(*args):"));
    }

    #[test]
    fn undocumented_entry_has_no_comment_above() {
        let out = render(&sample_set());
        assert!(out.contains("\n\ndef print(*args):\n    return communicate.call('print', args)\n"));
    }

    #[test]
    fn header_declares_generated_file_and_import() {
        let out = render(&FunctionSet::new());
        assert!(out.starts_with("#\n# For calling aggressor functions\n"));
        assert!(out.contains("auto-generated"));
        assert!(out.contains("\nimport communicate\n"));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render(&sample_set()), render(&sample_set()));
    }
}
