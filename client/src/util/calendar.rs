//! Calendar helpers for footer copy.
//!
//! The year is read at render time. In the browser it comes from the local
//! clock via `js_sys::Date`; during SSR and in tests it is the UTC year.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

/// Current calendar year.
#[allow(clippy::cast_possible_wrap)]
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().get_full_year() as i32
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}

/// Footer copyright line for `holder`.
pub fn copyright_line(year: i32, holder: &str) -> String {
    format!("© {year} {holder}. All rights reserved.")
}
