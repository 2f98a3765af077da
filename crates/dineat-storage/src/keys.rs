//! Well-known storage keys.
//!
//! Only the cart store writes [`CART`].

/// JSON array of cart line items.
pub const CART: &str = "cart";

/// `"en"` or `"ta"`.
pub const SELECTED_LANGUAGE: &str = "selectedLanguage";

/// `"customer"`, `"kitchen"` or `"admin"`.
pub const USER_TYPE: &str = "userType";

/// `"true"` while logged in. Only presence is checked.
pub const IS_LOGGED_IN: &str = "isLoggedIn";

/// RFC 3339 time of the last login.
pub const LOGIN_TIME: &str = "loginTime";

/// Selected table number as a decimal string.
pub const SELECTED_TABLE: &str = "selectedTable";

/// RFC 3339 time the table was selected.
pub const TABLE_SELECTION_TIME: &str = "tableSelectionTime";

/// JSON map of dish id to rating record.
pub const RATINGS: &str = "ratings";

/// Payment method of the last simulated payment.
pub const PAYMENT_METHOD: &str = "paymentMethod";

/// Total of the last simulated payment, two decimals.
pub const TOTAL_AMOUNT: &str = "totalAmount";

/// RFC 3339 time of the last simulated payment.
pub const ORDER_DATE: &str = "orderDate";
