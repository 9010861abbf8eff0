//! Phonological mora segmentation of hiragana readings

const SOKUON: char = 'っ';

fn is_small(ch: char) -> bool {
    matches!(
        ch,
        'ゃ' | 'ゅ' | 'ょ' | 'ぁ' | 'ぃ' | 'ぅ' | 'ぇ' | 'ぉ' | 'ゎ'
    )
}

/// Splits a hiragana string into mora units.
///
/// The geminate mark `っ` attaches forward as a prefix of the next mora
/// (`がっこう` → `が` `っこ` `う`); a trailing unattached mark becomes its
/// own final mora. Small kana and the prolongation mark `ー` attach
/// backward to the previously emitted mora (`ぎじゅつ` → `ぎ` `じゅ` `つ`),
/// or start a new one when nothing precedes them. Any other character
/// starts a new mora.
///
/// Invariant: concatenating the result reconstructs the input exactly, for
/// every input. A pending geminate mark is flushed as its own mora before
/// a small kana or a second mark, which keeps the order lossless even on
/// inputs no real reading produces.
pub fn split_mora(reading: &str) -> Vec<String> {
    let mut mora: Vec<String> = Vec::new();
    let mut pending_sokuon = false;
    for ch in reading.chars() {
        if ch == SOKUON {
            if pending_sokuon {
                mora.push(SOKUON.to_string());
            }
            pending_sokuon = true;
            continue;
        }
        if is_small(ch) || ch == 'ー' {
            if pending_sokuon {
                mora.push(SOKUON.to_string());
                pending_sokuon = false;
            }
            match mora.last_mut() {
                Some(last) => last.push(ch),
                None => mora.push(ch.to_string()),
            }
            continue;
        }
        let mut unit = String::new();
        if pending_sokuon {
            unit.push(SOKUON);
            pending_sokuon = false;
        }
        unit.push(ch);
        mora.push(unit);
    }
    if pending_sokuon {
        mora.push(SOKUON.to_string());
    }
    mora
}
