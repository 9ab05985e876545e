use std::io::Write;

use crate::core::classic;
use crate::utils::error::Result;

pub const SAMPLE_INPUT: [i64; 10] = [65, 43, 98, 43, 23, 76, 32, 54, 23, 43];

/// Runs the fixed ten-step showcase against a sink, one numbered line per
/// step. All state is explicit locals cloned off the sorted working vector.
pub struct DemoEngine<W: Write> {
    sink: W,
}

impl<W: Write> DemoEngine<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut sorted = SAMPLE_INPUT.to_vec();
        classic::sort(&mut sorted);
        self.step(1, "Sorted array", &fmt_seq(&sorted))?;

        let duplicates = classic::find_duplicates(&sorted);
        self.step(2, "Duplicates", &fmt_seq(&duplicates))?;

        let mut replaced = sorted.clone();
        classic::replace(76, 175, &mut replaced);
        self.step(3, "Replace", &fmt_seq(&replaced))?;

        let mut appended = sorted.clone();
        classic::append(276, &mut appended);
        self.step(4, "Added new element 276", &fmt_seq(&appended))?;

        // step 5 keeps working on the vector step 4 appended to, so 276
        // flows through into the filtered output
        classic::remove_duplicates(&mut appended);
        self.step(5, "After filtering duplicates", &fmt_seq(&appended))?;

        let mut scratch = sorted.clone();
        let unique = classic::dedup_into_new(&mut scratch);
        self.step(6, "New UniqueArray", &fmt_seq(&unique))?;

        let multiplied = classic::multiply_all(&unique, 10);
        self.step(7, "Multiply by 10", &fmt_seq(&multiplied))?;

        let reversed = classic::reverse_as_mutable(&sorted);
        self.step(8, "Reverse as mutable", &fmt_seq(&reversed))?;

        let reversed = classic::reverse_as_immutable(&sorted);
        self.step(9, "Reverse as immutable", &fmt_seq(&reversed))?;

        let counts = classic::find_duplicates_and_count(&sorted);
        self.step(10, "Display repeated times", &serde_json::to_string(&counts)?)?;

        Ok(())
    }

    fn step(&mut self, number: u8, label: &str, rendered: &str) -> Result<()> {
        tracing::debug!("step {}: {}", number, label);
        writeln!(self.sink, "{}.{}: {}", number, label, rendered)?;
        Ok(())
    }
}

fn fmt_seq(seq: &[i64]) -> String {
    seq.iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_seq_joins_without_spaces() {
        assert_eq!(fmt_seq(&[23, 23, 32]), "23,23,32");
        assert_eq!(fmt_seq(&[7]), "7");
        assert_eq!(fmt_seq(&[]), "");
    }
}
