// replay-core/src/simulation/account.rs

use tracing::{debug, warn};

/// The simulated trading account: a cash balance and a whole-unit holding
/// count, mutated under a fixed one-unit-per-trade rule.
///
/// Both mutators guard before they touch state, so `holdings` never goes
/// negative and `cash` never goes below zero (given non-negative inputs).
/// A rejected order is a silent no-op, mirroring an order that simply does
/// not fill.
#[derive(Debug, Clone)]
pub struct Account {
    initial_cash: f64,
    cash: f64,
    holdings: u32,
    fills: u32,
    rejected_buys: u32,
    rejected_sells: u32,
}

impl Account {
    /// Create an account holding `initial_cash` and no units. Negative
    /// initial cash is accepted as-is; its economic meaning is the
    /// caller's problem.
    pub fn new(initial_cash: f64) -> Self {
        Self {
            initial_cash,
            cash: initial_cash,
            holdings: 0,
            fills: 0,
            rejected_buys: 0,
            rejected_sells: 0,
        }
    }

    /// Buy one unit at `price` if the cash balance covers it.
    pub fn buy(&mut self, price: f64) {
        if self.cash >= price {
            self.holdings += 1;
            self.cash -= price;
            self.fills += 1;
            debug!(price, cash = self.cash, holdings = self.holdings, "Filled buy");
        } else {
            self.rejected_buys += 1;
            warn!(price, cash = self.cash, "Insufficient funds for buy order");
        }
    }

    /// Sell one unit at `price` if any units are held. No shorting.
    pub fn sell(&mut self, price: f64) {
        if self.holdings > 0 {
            self.holdings -= 1;
            self.cash += price;
            self.fills += 1;
            debug!(price, cash = self.cash, holdings = self.holdings, "Filled sell");
        } else {
            self.rejected_sells += 1;
            warn!(price, "No position to sell");
        }
    }

    /// Total equity at `price`: cash plus holdings marked to market.
    pub fn total_value(&self, price: f64) -> f64 {
        self.cash + self.holdings as f64 * price
    }

    pub fn initial_cash(&self) -> f64 {
        self.initial_cash
    }

    pub fn cash(&self) -> f64 {
        self.cash
    }

    pub fn holdings(&self) -> u32 {
        self.holdings
    }

    pub fn fills(&self) -> u32 {
        self.fills
    }

    pub fn rejected_buys(&self) -> u32 {
        self.rejected_buys
    }

    pub fn rejected_sells(&self) -> u32 {
        self.rejected_sells
    }
}
