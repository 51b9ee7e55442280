use std::io::{self, BufRead, Write};

use crate::models::draft_pack::DraftPack;
use crate::models::sort_key::SortKey;

use self::card_loader::RatingTable;
use self::ranker::MissingPolicy;

pub mod card_loader;
pub mod notify;
pub mod printer;
pub mod ranker;

/// How each pack is ordered and which columns are shown.
#[derive(Debug, Clone)]
pub struct Ranking {
    pub keys: Vec<SortKey>,
    pub missing: MissingPolicy,
}

/// Handles one log line. Returns without output for anything that is not a
/// usable draft notification.
pub fn process_line<W: Write>(
    line: &str,
    ratings: &RatingTable,
    ranking: &Ranking,
    out: &mut W,
) -> io::Result<()> {
    let notify = match notify::decode(line) {
        None => return Ok(()),
        Some(Ok(notify)) => notify,
        Some(Err(err)) => {
            log::warn!("Skipping draft notification: {}", err);
            return Ok(());
        }
    };

    let pack = match DraftPack::resolve(notify, ratings) {
        Ok(pack) => pack,
        Err(err) => {
            log::warn!("Skipping draft notification: {}", err);
            return Ok(());
        }
    };

    log::debug!(
        "Draft {} ({}) pack {} pick {} via {}: {} cards",
        pack.draft_id,
        pack.event_name,
        pack.pack_number,
        pack.pick_number,
        pack.method,
        pack.card_ids.len()
    );
    if pack.cards.is_empty() {
        log::debug!("Nothing to rank for draft {}", pack.draft_id);
        return Ok(());
    }

    let ranked = ranker::rank(&pack.cards, &ranking.keys, ranking.missing);
    printer::write_pack(out, &pack, &ranked, &ranking.keys)
}

/// Reads log lines until the input is exhausted.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    ratings: &RatingTable,
    ranking: &Ranking,
    out: &mut W,
) -> io::Result<()> {
    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buffer);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        process_line(line, ratings, ranking, out)?;
    }

    Ok(())
}
