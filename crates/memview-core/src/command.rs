//! Operator-invokable array printing command.
//!
//! `print-array <address-expression>` is a thin wrapper: it resolves the
//! expression through the host's evaluator, resolves the element count
//! through the same accessor call the array decoder uses, and then hands
//! the range to the host's own contiguous-range printing facility. It
//! deliberately does not re-implement per-element decoding.

use tracing::debug;

use crate::process::layout;
use crate::process::InspectedProcess;
use crate::render::tokens;

/// Host facilities the `print-array` command delegates to.
pub trait ArrayPrintHost: InspectedProcess {
    /// Resolve a free-form address expression to an address.
    fn evaluate(&self, expr: &str) -> crate::error::Result<u64>;

    /// Print `count` contiguous elements starting at `address` using the
    /// host's native range display. The element granularity is the
    /// host's own business.
    fn print_range(&self, address: u64, count: u64) -> crate::error::Result<String>;
}

/// Run the `print-array` command against `expr`.
///
/// Total: the operator always gets some string back. An unresolvable
/// expression renders the error token; an unresolvable count renders the
/// no-data token; a zero count renders the empty-collection token.
pub fn print_array<H: ArrayPrintHost + ?Sized>(host: &H, expr: &str) -> String {
    let address = match host.evaluate(expr) {
        Ok(address) => address,
        Err(e) => {
            debug!("Address expression `{}` did not resolve: {}", expr, e);
            return tokens::ERROR.to_string();
        }
    };
    let count = match host.call_remote(layout::ARRAY_COUNT_FN, &[address]) {
        Ok(count) => count,
        Err(e) => {
            debug!("Count accessor call failed for array at {:#x}: {}", address, e);
            return tokens::EMPTY.to_string();
        }
    };
    if count == 0 {
        return tokens::EMPTY_COLLECTION.to_string();
    }
    host.print_range(address, count).unwrap_or_else(|e| {
        debug!("Range print of {} elements at {:#x} failed: {}", count, address, e);
        tokens::ERROR.to_string()
    })
}
