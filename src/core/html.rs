// src/core/html.rs

// Index-based tag scanning. No document tree; every helper works on the
// raw page text and returns byte ranges into it. ASCII-lowering keeps
// byte offsets stable, so ranges from the lowered copy index the original.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Next `<tag` opening at or after `from`. The character after the tag
/// name must end it (whitespace, `>` or `/`), so scanning for `a` does
/// not stop at `<abbr`.
pub fn next_open_tag_ci(s: &str, tag: &str, from: usize) -> Option<usize> {
    let lc = to_lower(s);
    let open = join!("<", &to_lower(tag));
    find_open(&lc, &open, from)
}

fn find_open(lc: &str, open: &str, from: usize) -> Option<usize> {
    let mut at = from;
    loop {
        let idx = at + lc.get(at..)?.find(open)?;
        match lc[idx + open.len()..].chars().next() {
            Some(c) if c == '>' || c == '/' || c.is_ascii_whitespace() => return Some(idx),
            Some(_) => at = idx + open.len(),
            None => return None,
        }
    }
}

/// Byte offset just past the `>` that closes the tag opened at `start`.
pub fn open_tag_end(s: &str, start: usize) -> Option<usize> {
    s.get(start..)?.find('>').map(|i| start + i + 1)
}

/// First-close `<tag ...>...</tag>` block at or after `from`.
/// Only for tags that don't nest (h2, a); a nested same-named tag would
/// end the block early.
pub fn next_tag_block_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let tl = to_lower(tag);
    let open = join!("<", &tl);
    let close = join!("</", &tl, ">");

    let start = find_open(&lc, &open, from)?;
    let open_end = open_tag_end(s, start)?;
    let end_rel = lc.get(open_end..)?.find(&close)?;
    Some((start, open_end + end_rel + close.len()))
}

/// Depth-matched `<tag ...>...</tag>` block at or after `from`, for tags
/// that nest (div). Returns None on an unbalanced tail.
pub fn next_balanced_block_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let tl = to_lower(tag);
    let open = join!("<", &tl);
    let close = join!("</", &tl, ">");

    let start = find_open(&lc, &open, from)?;
    let mut pos = open_tag_end(s, start)?;
    let mut depth = 1usize;
    while depth > 0 {
        let next_open = find_open(&lc, &open, pos);
        let next_close = lc.get(pos..)?.find(&close).map(|i| pos + i);
        match (next_open, next_close) {
            (Some(o), Some(c)) if o < c => {
                pos = open_tag_end(s, o)?;
                depth += 1;
            }
            (_, Some(c)) => {
                pos = c + close.len();
                depth -= 1;
            }
            (_, None) => return None,
        }
    }
    Some((start, pos))
}

/// First depth-matched block whose open tag carries `class` as a
/// substring, e.g. `find_block_with_class_ci(doc, "div", "col-lg-12")`.
pub fn find_block_with_class_ci(s: &str, tag: &str, class: &str) -> Option<(usize, usize)> {
    let class_lc = to_lower(class);
    let mut pos = 0usize;
    while let Some(start) = next_open_tag_ci(s, tag, pos) {
        let head_end = open_tag_end(s, start)?;
        if to_lower(&s[start..head_end]).contains(&class_lc) {
            return next_balanced_block_ci(s, tag, start);
        }
        pos = head_end;
    }
    None
}

/// Content between a block's open tag and its final close tag.
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Drop tags, keep the text as written — newlines included. Doc blocks
/// rely on the page's own line structure surviving this.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}
