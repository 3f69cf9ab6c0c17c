//! Built-in demonstration run
//!
//! Invoking the binary with no arguments extracts requirements from this
//! embedded laundromat description and prints them as a numbered list.

use crate::error::CliResult;
use reqsift_core::RequirementsExtractor;

/// The example system description processed when no subcommand is given
pub const EXAMPLE_DESCRIPTION: &str = "\
A laundromat provides self-service washing and drying machines for customers. \
Customers can walk in and use available machines or reserve a machine in advance \
through an online booking system. Each washing machine and dryer has a unique \
identifier. Customers must select a machine, choose a wash or dry cycle, and make \
a payment before starting the machine. Payments can be made using coins, a prepaid \
card, or an online payment system.

Once the machine is started, the system displays the remaining time for the cycle. \
Customers can check the status of their machine using a mobile app or a kiosk at \
the laundromat. If a machine finishes and the laundry is not removed within 10 \
minutes, the system sends a reminder notification to the customer. If the machine \
is still occupied after 30 minutes, staff may move the laundry to a designated area.

The laundromat also offers a drop-off service where customers can leave their \
laundry with an attendant, who will wash, dry, and fold the clothes. The system \
tracks drop-off orders, assigns them to available attendants, and notifies \
customers when their laundry is ready for pickup.

The laundromat system also maintains a maintenance log for each machine, \
automatically flagging machines that require servicing based on error reports or \
usage counts. Staff can update the status of machines and schedule repairs.";

/// Run the demonstration and print grouped requirements to stdout
pub fn run() -> CliResult<()> {
    let extractor = RequirementsExtractor::new();
    let requirements = extractor.extract_and_format(EXAMPLE_DESCRIPTION)?;
    for (index, requirement) in requirements.iter().enumerate() {
        println!("{}. {}", index + 1, requirement);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_description_yields_requirements() {
        let extractor = RequirementsExtractor::new();
        let requirements = extractor.extract_and_format(EXAMPLE_DESCRIPTION).unwrap();
        assert!(!requirements.is_empty());
        for requirement in &requirements {
            assert!(requirement.ends_with('.'));
        }
    }
}
