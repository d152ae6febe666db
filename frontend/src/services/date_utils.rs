/// Get current date formatted for display (e.g., "January 15, 2025").
pub fn get_current_date_display() -> String {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    let month_name = match month as u32 {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "January",
    };
    format!("{} {}, {}", month_name, day as u32, year as u32)
}
