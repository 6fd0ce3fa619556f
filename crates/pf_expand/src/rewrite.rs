//! Identifier rewriting: base type names become arity-qualified names.
//!
//! Matching is on whole identifier tokens, so `Function` in prose or an
//! unrelated `MyFuncError` is never touched, while `FuncError` in code, doc
//! text, and `use` lines is. The arity goes after the `Func`/`CtxFunc`
//! stem, not at the end: `CtxFuncResult` at arity 2 is `CtxFunc2Result`.

/// Replace every family base name in `source` with its arity-qualified
/// form. Returns the rewritten text and how many tokens were replaced;
/// the caller treats zero as a mismatch.
pub fn qualify_names(source: &str, arity: u32) -> (String, usize) {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len() + 64);
    let mut count = 0;
    let mut i = 0;

    while i < chars.len() {
        if is_word_start(&chars, i) {
            let word_end = scan_word(&chars, i);
            let word: String = chars[i..word_end].iter().collect();
            match qualified(&word, arity) {
                Some(q) => {
                    out.push_str(&q);
                    count += 1;
                }
                None => out.push_str(&word),
            }
            i = word_end;
            continue;
        }

        out.push(chars[i]);
        i += 1;
    }

    (out, count)
}

/// The arity-qualified form of `word`, if it is a family base name.
fn qualified(word: &str, arity: u32) -> Option<String> {
    let (stem, suffix) = if let Some(rest) = word.strip_prefix("CtxFunc") {
        ("CtxFunc", rest)
    } else if let Some(rest) = word.strip_prefix("Func") {
        ("Func", rest)
    } else {
        return None;
    };

    match suffix {
        "" | "Error" | "Value" | "Result" => Some(format!("{stem}{arity}{suffix}")),
        _ => None,
    }
}

fn is_word_start(chars: &[char], i: usize) -> bool {
    if !chars[i].is_alphabetic() && chars[i] != '_' {
        return false;
    }
    if i > 0 && (chars[i - 1].is_alphanumeric() || chars[i - 1] == '_') {
        return false;
    }
    true
}

fn scan_word(chars: &[char], start: usize) -> usize {
    let mut i = start;
    while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualifies_whole_family() {
        let input = "pub struct FuncError(Box<dyn Fn() -> Result<(), Error>>);";
        let (output, count) = qualify_names(input, 2);
        assert_eq!(
            output,
            "pub struct Func2Error(Box<dyn Fn() -> Result<(), Error>>);"
        );
        assert_eq!(count, 1);
    }

    #[test]
    fn arity_goes_after_the_stem() {
        let (output, _) = qualify_names("CtxFuncResult CtxFunc FuncValue Func", 10);
        assert_eq!(output, "CtxFunc10Result CtxFunc10 Func10Value Func10");
    }

    #[test]
    fn embedding_identifiers_are_left_alone() {
        let input = "// Functional helpers live in MyFuncErrorSet, not here.";
        let (output, count) = qualify_names(input, 3);
        assert_eq!(output, input);
        assert_eq!(count, 0);
    }

    #[test]
    fn use_lines_and_doc_text_are_rewritten() {
        let (output, count) = qualify_names("/// Turns a Func into a FuncError.", 1);
        assert_eq!(output, "/// Turns a Func1 into a Func1Error.");
        assert_eq!(count, 2);
    }

    #[test]
    fn carrier_type_is_not_part_of_the_family() {
        let (output, count) = qualify_names("pub fn exec(&self, ctx: Ctx) {", 4);
        assert_eq!(output, "pub fn exec(&self, ctx: Ctx) {");
        assert_eq!(count, 0);
    }
}
