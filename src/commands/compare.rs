use std::cmp::Ordering;

use anyhow::Result;

use crate::version::VersionId;

/// Compare two version literals and print their ordering.
#[tracing::instrument]
pub fn run(a: &str, b: &str) -> Result<()> {
    let left: VersionId = a.parse()?;
    let right: VersionId = b.parse()?;
    println!("{} {} {}", left, ordering_symbol(left.cmp(&right)), right);
    Ok(())
}

fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}
