// src/core/html.rs

/// Case-insensitive `<script …>…</script>` scanner over a whole document.
/// Yields the inner text of each block in document order. Empty blocks are skipped.
pub struct ScriptBlocks<'a> {
    doc: &'a str,
    lc: String, // ASCII-lowercased copy; same byte offsets as `doc`
    pos: usize,
}

impl<'a> ScriptBlocks<'a> {
    pub fn new(doc: &'a str) -> Self {
        Self { doc, lc: doc.to_ascii_lowercase(), pos: 0 }
    }
}

impl<'a> Iterator for ScriptBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let start = self.lc.get(self.pos..)?.find("<script")? + self.pos;
            let open_end = self.lc[start..].find('>')? + start + 1;
            let close = self.lc[open_end..].find("</script")? + open_end;
            self.pos = close + "</script".len();

            let inner = &self.doc[open_end..close];
            if !inner.trim().is_empty() {
                return Some(inner);
            }
        }
    }
}

pub fn script_blocks(doc: &str) -> ScriptBlocks<'_> {
    ScriptBlocks::new(doc)
}
