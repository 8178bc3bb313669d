/// Minimum number of columns a register file must carry.
pub const MIN_COLUMNS: usize = 9;

/// Strict date format used by the register ("25/12/2024").
pub const DATE_FORMAT: &str = "%d/%m/%Y";

// Column positions in the register file. Header names vary between exports
// (and carry stray padding), so cells are addressed by index.

/// Transaction date.
pub const COL_DATE: usize = 0;

/// Total money moved by the transaction.
pub const COL_AMOUNT: usize = 1;

/// Decrease column of the running bank statement; not materialized.
pub const COL_DECREASE: usize = 2;

/// Balance column of the running bank statement; not materialized.
pub const COL_BALANCE: usize = 3;

/// Transaction category label.
pub const COL_CATEGORY: usize = 4;

/// Originating bank.
pub const COL_BANK: usize = 5;

/// Originating account number.
pub const COL_ACCOUNT: usize = 6;

/// Shareholder display name.
pub const COL_SHAREHOLDER_NAME: usize = 7;

/// Shareholder identifier, matched case-insensitively.
pub const COL_SHAREHOLDER_ID: usize = 8;

/// Price of one fund unit at transaction time.
pub const COL_UNIT_PRICE: usize = 9;

/// Fund units purchased by the transaction.
pub const COL_UNIT_QUANTITY: usize = 10;

/// Free-form transfer note.
pub const COL_CONTENT: usize = 11;
