use anyhow::{Context, Result};
use colored::Colorize;
use ringbuffer::RingBuffer;
use std::fmt::Write as _;

/// Buffer size used when `--capacity` is not given.
pub const DEFAULT_CAPACITY: usize = 16;

pub fn run(capacity: usize, verbose: bool) -> Result<()> {
    if verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "ringbuffer=trace".into()),
            )
            .init();
    }

    println!();
    println!("{}", "🔁 Ring buffer demo".cyan().bold());
    println!("{}", format!("   buffer size={capacity}").dimmed());

    let mut storage = vec![0u8; capacity];
    let mut ring = RingBuffer::new(&mut storage).context("Invalid --capacity")?;

    for step in Step::ALL {
        let mut body = String::new();
        step.apply(&mut ring, &mut body)?;
        println!();
        println!("{}", step.title(capacity).cyan());
        print!("{body}");
    }

    println!();
    println!("{}", "✓ Demo finished".green().bold());
    println!();
    Ok(())
}

/// One stage of the demo, mirroring the classic put/get/overflow/drain walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    PutFive,
    GetTwo,
    Fill,
    Flush,
    Drain,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::PutFive,
        Step::GetTwo,
        Step::Fill,
        Step::Flush,
        Step::Drain,
    ];

    pub fn title(self, capacity: usize) -> String {
        match self {
            Step::PutFive => "---> put 5 data in ringbuffer".to_string(),
            Step::GetTwo => "<--- get 2 data from ringbuffer".to_string(),
            Step::Fill => format!(
                "---> clear, then put {} data to make buffer full",
                capacity - 1
            ),
            Step::Flush => format!("---> put {capacity} more data to flush the buffer"),
            Step::Drain => format!("<--- get {capacity} data from ringbuffer"),
        }
    }

    /// Run this step against `ring`, writing a plain-text report to `out`.
    pub fn apply(self, ring: &mut RingBuffer<'_>, out: &mut String) -> Result<()> {
        let capacity = ring.capacity();
        match self {
            Step::PutFive => put_range(ring, 0..5, out)?,
            Step::GetTwo => {
                for i in 0..2 {
                    match ring.get() {
                        Some(value) => writeln!(out, "    index={i:2}, data={value:#x}")?,
                        None => writeln!(out, "    index={i:2}, buffer empty")?,
                    }
                }
            }
            Step::Fill => {
                ring.clear();
                put_range(ring, 0..capacity - 1, out)?;
            }
            Step::Flush => put_range(ring, capacity - 1..2 * capacity - 1, out)?,
            Step::Drain => {
                let mut buf = vec![0u8; capacity];
                let n = ring.get_many(&mut buf);
                writeln!(out, "    requested={capacity}, got={n}")?;
                for (i, value) in buf.iter().take(n).enumerate() {
                    writeln!(out, "    index={i:2}, data={value:#x}")?;
                }
            }
        }
        write!(out, "{}", ring.dump())?;
        Ok(())
    }
}

fn put_range(
    ring: &mut RingBuffer<'_>,
    range: std::ops::Range<usize>,
    out: &mut String,
) -> Result<()> {
    for i in range {
        #[allow(clippy::cast_possible_truncation)] // demo payload wraps past 0xFF
        let value = i as u8;
        if ring.put(value).overwrote() {
            writeln!(out, "data flushed when put data, i={i:2}")?;
        }
    }
    Ok(())
}
