//! Renders test cases as `runTestCase` snippets.

use crate::model::TestCase;
use anyhow::Result;
use std::io::Write;

/// Renders one case, including the blank line before and after the block.
pub fn render_case(case: &TestCase) -> String {
    format!(
        r#"
    "{len}" in {{
      runTestCase(
        inputLen = {len},
        hash = "{hash}",
        keyedHash = "{keyed}",
        deriveKeyHash = "{derive}"
      )
    }}

"#,
        len = case.input_len,
        hash = case.hash,
        keyed = case.keyed_hash,
        derive = case.derive_key,
    )
}

/// Writes every case to `out` in order and returns how many were written.
pub fn write_cases<W: Write>(out: &mut W, cases: &[TestCase]) -> Result<usize> {
    for case in cases {
        out.write_all(render_case(case).as_bytes())?;
    }
    out.flush()?;
    Ok(cases.len())
}
