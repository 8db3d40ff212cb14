//! Diff rendering for fixture comparison.

/// Render a text diff between expected and actual output.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let mut out = String::new();
    out.push_str("--- expected\n");
    out.push_str("+++ actual\n");
    let e_lines: Vec<_> = expected.lines().collect();
    let a_lines: Vec<_> = actual.lines().collect();
    for i in 0..e_lines.len().max(a_lines.len()) {
        let e = e_lines.get(i);
        let a = a_lines.get(i);
        if e != a {
            out.push_str(&format!("@@ line {} @@\n", i + 1));
            if let Some(e) = e {
                out.push_str(&format!("-{e}\n"));
            }
            if let Some(a) = a {
                out.push_str(&format!("+{a}\n"));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical() {
        assert_eq!(render_diff("6", "6"), "[identical]");
    }

    #[test]
    fn single_line_mismatch() {
        assert_eq!(
            render_diff("6", "17"),
            "--- expected\n+++ actual\n@@ line 1 @@\n-6\n+17\n"
        );
    }

    #[test]
    fn extra_actual_line_is_shown() {
        let d = render_diff("a", "a\nb");
        assert!(d.contains("@@ line 2 @@\n+b\n"));
    }
}
