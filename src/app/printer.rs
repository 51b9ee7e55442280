use std::io::{self, Write};

use itertools::Itertools;

use crate::models::card_rating::CardRating;
use crate::models::draft_pack::DraftPack;
use crate::models::sort_key::SortKey;

const NO_VALUE: &str = " --- ";

pub fn header(pack: &DraftPack) -> String {
    format!(
        "Draft {} Pack {} Pick {}:",
        pack.draft_id, pack.pack_number, pack.pick_number
    )
}

fn columns(card: &CardRating, keys: &[SortKey]) -> String {
    keys.iter()
        .map(|key| {
            let value = match card.display(key.metric) {
                "" => NO_VALUE,
                value => value,
            };
            format!("{} = {}", key.metric.label(), value)
        })
        .join("\t")
}

pub fn card_line(index: u64, card: &CardRating, keys: &[SortKey]) -> String {
    format!(
        "{:02}:\t{}\t|\t{}\t'{}'\t{}\t{}",
        index,
        columns(card, keys),
        card.card_id,
        card.name,
        card.color,
        card.rarity
    )
}

/// Writes a header block and one line per card, numbered from the pick.
pub fn write_pack<W: Write>(
    out: &mut W,
    pack: &DraftPack,
    ranked: &[&CardRating],
    keys: &[SortKey],
) -> io::Result<()> {
    writeln!(out, "\n\n{}\n", header(pack))?;
    for (index, card) in (u64::from(pack.pick_number) + 1..).zip(ranked) {
        writeln!(out, "{}", card_line(index, card, keys))?;
    }
    out.flush()
}
