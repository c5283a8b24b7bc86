use pa_core::art::AsciiArt;

/// Collapse art to a bilevel silhouette.
///
/// The most frequent character is treated as background and mapped to
/// space; every other non-space, non-newline character becomes the
/// replacement glyph. Newlines survive verbatim. Neither the newline
/// nor the replacement glyph itself can be elected background — the
/// latter would blank the art on a second pass whenever the silhouette
/// outnumbers the spaces. At equal counts the first-seen character
/// wins.
///
/// Idempotent: applying it to its own output yields the same text.
#[must_use]
pub fn collapse(art: &AsciiArt, replacement: char) -> AsciiArt {
    let background = most_frequent_char(art.as_str(), replacement);
    let collapsed: String = art
        .as_str()
        .chars()
        .map(|c| {
            if c == '\n' {
                '\n'
            } else if Some(c) == background || c == ' ' {
                ' '
            } else {
                replacement
            }
        })
        .collect();
    AsciiArt::from_text(collapsed)
}

/// First-seen order frequency scan; ties prefer non-newline characters
/// and the excluded glyph is never a candidate.
fn most_frequent_char(text: &str, excluded: char) -> Option<char> {
    // Vec keeps first-occurrence order so ties resolve deterministically.
    let mut counts: Vec<(char, usize)> = Vec::new();
    for c in text.chars() {
        if c == excluded {
            continue;
        }
        match counts.iter_mut().find(|(seen, _)| *seen == c) {
            Some((_, n)) => *n += 1,
            None => counts.push((c, 1)),
        }
    }

    let mut best: Option<(char, usize)> = None;
    for (c, n) in counts {
        let wins = match best {
            None => true,
            Some((b, m)) => n > m || (n == m && b == '\n' && c != '\n'),
        };
        if wins {
            best = Some((c, n));
        }
    }
    best.map(|(c, _)| c)
}
