use time::Date;

use crate::domain::market_time::format_date;
use crate::{OptionType, SortOrder, StrikePrice, Symbol, Timespan, ValidationError};

pub const MAX_AGGREGATES_LIMIT: u32 = 50_000;
pub const MAX_REFERENCE_LIMIT: u32 = 1_000;

fn check_limit(limit: u32, max: u32) -> Result<u32, ValidationError> {
    if limit == 0 || limit > max {
        return Err(ValidationError::LimitOutOfRange { value: limit, max });
    }
    Ok(limit)
}

/// Window and bar size for an aggregates query.
///
/// Fields are read-only; the bounds are checked on construction and in the
/// `with_*` setters.
///
/// ```rust,compile_fail
/// use ticktape_core::AggregatesRange;
/// use time::macros::date;
///
/// let mut range = AggregatesRange::daily(date!(2024 - 01 - 02), date!(2024 - 01 - 05))?;
/// range.limit = 0;
/// # Ok::<(), ticktape_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatesRange {
    multiplier: u32,
    timespan: Timespan,
    from: Date,
    to: Date,
    adjusted: bool,
    sort: SortOrder,
    limit: u32,
}

impl AggregatesRange {
    pub fn new(
        multiplier: u32,
        timespan: Timespan,
        from: Date,
        to: Date,
    ) -> Result<Self, ValidationError> {
        if multiplier == 0 {
            return Err(ValidationError::ZeroMultiplier);
        }
        if from > to {
            return Err(ValidationError::InvertedRange {
                from: format_date(from),
                to: format_date(to),
            });
        }
        Ok(Self {
            multiplier,
            timespan,
            from,
            to,
            adjusted: true,
            sort: SortOrder::Asc,
            limit: 5_000,
        })
    }

    /// Daily bars over an inclusive date range.
    pub fn daily(from: Date, to: Date) -> Result<Self, ValidationError> {
        Self::new(1, Timespan::Day, from, to)
    }

    pub fn with_limit(mut self, limit: u32) -> Result<Self, ValidationError> {
        self.limit = check_limit(limit, MAX_AGGREGATES_LIMIT)?;
        Ok(self)
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_adjusted(mut self, adjusted: bool) -> Self {
        self.adjusted = adjusted;
        self
    }

    pub const fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub const fn timespan(&self) -> Timespan {
        self.timespan
    }

    pub const fn from_date(&self) -> Date {
        self.from
    }

    pub const fn to_date(&self) -> Date {
        self.to
    }

    pub const fn adjusted(&self) -> bool {
        self.adjusted
    }

    pub const fn sort(&self) -> SortOrder {
        self.sort
    }

    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// `{multiplier}/{timespan}/{from}/{to}` path tail.
    pub(crate) fn path_segment(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.multiplier,
            self.timespan,
            format_date(self.from),
            format_date(self.to)
        )
    }

    pub(crate) fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("adjusted", self.adjusted.to_string()),
            ("sort", self.sort.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

/// Stock aggregates query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatesRequest {
    symbol: Symbol,
    range: AggregatesRange,
}

impl AggregatesRequest {
    pub fn new(symbol: Symbol, range: AggregatesRange) -> Self {
        Self { symbol, range }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn range(&self) -> &AggregatesRange {
        &self.range
    }
}

/// Filters for `/v3/reference/options/contracts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractsRequest {
    underlying: Option<Symbol>,
    contract_type: Option<OptionType>,
    expiration_date: Option<Date>,
    strike_price: Option<StrikePrice>,
    expired: bool,
    limit: u32,
}

impl Default for ContractsRequest {
    fn default() -> Self {
        Self {
            underlying: None,
            contract_type: None,
            expiration_date: None,
            strike_price: None,
            expired: false,
            limit: 100,
        }
    }
}

impl ContractsRequest {
    pub fn for_underlying(underlying: Symbol) -> Self {
        Self {
            underlying: Some(underlying),
            ..Self::default()
        }
    }

    pub fn with_contract_type(mut self, contract_type: OptionType) -> Self {
        self.contract_type = Some(contract_type);
        self
    }

    pub fn with_expiration_date(mut self, expiration_date: Date) -> Self {
        self.expiration_date = Some(expiration_date);
        self
    }

    pub fn with_strike_price(mut self, strike_price: StrikePrice) -> Self {
        self.strike_price = Some(strike_price);
        self
    }

    pub fn include_expired(mut self, expired: bool) -> Self {
        self.expired = expired;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Result<Self, ValidationError> {
        self.limit = check_limit(limit, MAX_REFERENCE_LIMIT)?;
        Ok(self)
    }

    pub fn underlying(&self) -> Option<&Symbol> {
        self.underlying.as_ref()
    }

    pub const fn contract_type(&self) -> Option<OptionType> {
        self.contract_type
    }

    pub const fn expiration_date(&self) -> Option<Date> {
        self.expiration_date
    }

    pub const fn strike_price(&self) -> Option<StrikePrice> {
        self.strike_price
    }

    pub const fn expired(&self) -> bool {
        self.expired
    }

    pub const fn limit(&self) -> u32 {
        self.limit
    }

    pub(crate) fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(6);
        if let Some(underlying) = &self.underlying {
            params.push(("underlying_ticker", underlying.to_string()));
        }
        if let Some(contract_type) = self.contract_type {
            params.push(("contract_type", contract_type.to_string()));
        }
        if let Some(expiration_date) = self.expiration_date {
            params.push(("expiration_date", format_date(expiration_date)));
        }
        if let Some(strike_price) = self.strike_price {
            params.push(("strike_price", strike_price.to_string()));
        }
        params.push(("expired", self.expired.to_string()));
        params.push(("limit", self.limit.to_string()));
        params
    }
}

/// Filters for `/v3/reference/tickers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickersRequest {
    search: Option<String>,
    market: Option<String>,
    active: Option<bool>,
    limit: u32,
}

impl Default for TickersRequest {
    fn default() -> Self {
        Self {
            search: None,
            market: None,
            active: Some(true),
            limit: 100,
        }
    }
}

impl TickersRequest {
    pub fn search(query: impl Into<String>) -> Result<Self, ValidationError> {
        let query = query.into();
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptySearch);
        }
        Ok(Self {
            search: Some(trimmed.to_owned()),
            ..Self::default()
        })
    }

    pub fn with_market(mut self, market: impl Into<String>) -> Self {
        self.market = Some(market.into().to_ascii_lowercase());
        self
    }

    pub fn with_active(mut self, active: Option<bool>) -> Self {
        self.active = active;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Result<Self, ValidationError> {
        self.limit = check_limit(limit, MAX_REFERENCE_LIMIT)?;
        Ok(self)
    }

    pub fn search_text(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn market(&self) -> Option<&str> {
        self.market.as_deref()
    }

    pub const fn active(&self) -> Option<bool> {
        self.active
    }

    pub const fn limit(&self) -> u32 {
        self.limit
    }

    pub(crate) fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(4);
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        if let Some(market) = &self.market {
            params.push(("market", market.clone()));
        }
        if let Some(active) = self.active {
            params.push(("active", active.to_string()));
        }
        params.push(("limit", self.limit.to_string()));
        params
    }
}
