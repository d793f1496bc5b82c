//! Fixture inspection.

use std::path::PathBuf;

use super::resolve_fixture;

/// Print the effective fixture values without touching the store.
///
/// # Errors
///
/// Returns an error if the fixture file cannot be loaded.
pub fn show(file: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let fixture = resolve_fixture(file)?;

    #[allow(clippy::print_stdout)]
    {
        println!("sys_locale={}", fixture.sys_locale);
        println!("order_prefix={}", fixture.order_prefix);
        println!("login_json={}", fixture.login_json);
        println!("bank_balance={}", fixture.bank_balance);
        println!("vip_json={}", fixture.vip_json);
        println!("coupon_status={}", fixture.coupon_status);
        println!("coupon_category={}", fixture.coupon_category);
        println!("coupon_min_amount={}", fixture.coupon_min_amount);
        println!("coupon_expiry_date={}", fixture.coupon_expiry_date);
    }

    Ok(())
}
