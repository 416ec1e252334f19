use quote_core::RescalePolicy;

use crate::cli::Args;

pub(crate) const INPUT_DIR: &str = ".";
pub(crate) const FILE_PATTERN: &str = "hycdx_option_quotes_*.txt";
pub(crate) const OUTPUT_FILE: &str = "output_smo.csv";

pub(crate) use quote_core::{
    DEFAULT_NO_RESCALE_SENDER as NO_RESCALE_SENDER, DEFAULT_PRICE_DIVISOR as PRICE_DIVISOR,
};

pub(crate) fn rescale_policy(args: &Args) -> RescalePolicy {
    RescalePolicy::new(args.no_rescale_senders.iter().cloned(), args.price_divisor)
}
