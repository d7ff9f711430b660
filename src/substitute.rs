//! Substitution engine: one left-to-right pass replacing keys by their values.
use crate::{dictionary::ConversionTable, pattern::CompiledPattern, pipeline::Pipeline};
use regex::Captures;
use std::borrow::Cow;

/// Replace every key `pattern` finds in `text` with its value in `table`.
///
/// Matches never overlap and replacement text is never rescanned. Characters
/// that are not part of any key pass through unchanged; when nothing matches
/// the input is returned borrowed.
pub fn substitute<'a>(
    pattern: &CompiledPattern,
    table: &ConversionTable,
    text: &'a str,
) -> Cow<'a, str> {
    pattern.regex().replace_all(text, |caps: &Captures<'_>| {
        let key = &caps[0];
        table.get(key).unwrap_or(key).to_owned()
    })
}

/// Like [`substitute`], but every maximal run of adjacent matches is converted
/// and then passed through `post` on its own.
///
/// Text between runs is copied verbatim and never seen by `post`, so the
/// rules only rewrite what the table produced.
pub fn substitute_runs<'a>(
    pattern: &CompiledPattern,
    table: &ConversionTable,
    text: &'a str,
    post: &Pipeline,
) -> Cow<'a, str> {
    let mut matches = pattern.regex().find_iter(text).peekable();
    if matches.peek().is_none() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() * 2);
    let mut run = String::new();
    let mut last = 0;
    for m in matches {
        if m.start() != last {
            flush_run(&mut out, &mut run, post);
            out.push_str(&text[last..m.start()]);
        }
        let key = m.as_str();
        run.push_str(table.get(key).unwrap_or(key));
        last = m.end();
    }
    flush_run(&mut out, &mut run, post);
    out.push_str(&text[last..]);
    Cow::Owned(out)
}

fn flush_run(out: &mut String, run: &mut String, post: &Pipeline) {
    if run.is_empty() {
        return;
    }
    out.push_str(&post.process(Cow::Borrowed(run.as_str())));
    run.clear();
}
