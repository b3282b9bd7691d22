use std::io::Read;

use crate::questions::{Rating, Responses};
use crate::Error;

/// Read questionnaire answers in bulk from CSV.
///
/// Each row is `id,a1,..,aN` with answers in 1..=5. A row may carry fewer
/// than N answers, and cells may be empty; both leave slots unanswered,
/// which the scoring engine neutralises. Extra cells or out-of-range
/// values fail that row only.
pub fn read_bulk<R: Read>(
    reader: R,
    len: usize,
) -> impl Iterator<Item = Result<(String, Responses), Error>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader)
        .into_records()
        .map(move |record| {
            let record = record?;
            let mut cells = record.iter();
            let id = cells
                .next()
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .ok_or_else(|| Error::MalformedRow("missing id".to_string()))?
                .to_string();
            let mut responses = Responses::new(len);
            for (index, cell) in cells.enumerate() {
                if index >= len {
                    return Err(Error::MalformedRow(format!(
                        "row {id} has more than {len} answers"
                    )));
                }
                let cell = cell.trim();
                if cell.is_empty() {
                    continue;
                }
                let value = cell.parse::<u8>().map_err(|_| Error::IllegalAnswer)?;
                responses.set(index, Rating::try_from(value)?)?;
            }
            Ok((id, responses))
        })
}
