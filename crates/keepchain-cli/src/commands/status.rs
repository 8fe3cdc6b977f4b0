use keepchain_core::{format_amount, Dashboard, DayLabel};

use crate::common::{header_line, status_text, CliResult, Session};

pub fn status(session: &Session) -> CliResult {
    let tracker = session.tracker()?;
    let dash = tracker.dashboard();
    if session.json {
        println!("{}", serde_json::to_string_pretty(&dash)?);
        return Ok(());
    }
    println!("{}", render(&dash));
    Ok(())
}

pub fn grid(session: &Session, days: Option<u32>) -> CliResult {
    let tracker = session.tracker()?;
    let days = days.unwrap_or(tracker.config().streak.grid_days);
    let dash = Dashboard::build(tracker.state(), tracker.today(), days);

    if session.json {
        println!("{}", serde_json::to_string_pretty(&dash.grid)?);
        return Ok(());
    }
    println!("Last {days} days: {}", dash.grid_line());
    for cell in dash.grid.iter().filter(|c| c.label != DayLabel::Pending) {
        println!("  {}: {}", cell.date, cell.label);
    }
    Ok(())
}

fn render(dash: &Dashboard) -> String {
    let mut out = Vec::new();
    out.push(header_line(dash));
    out.push(format!("Today: {}", status_text(dash.status)));
    out.push(format!("Last {} days: {}", dash.grid.len(), dash.grid_line()));
    out.push(String::new());

    out.push(format!("Promises: {}", dash.promises.hint));
    for (i, p) in dash.promises.items.iter().enumerate() {
        out.push(format!(
            "  {}. [{}] {}  #{}  ({})",
            i + 1,
            if p.done { "x" } else { " " },
            p.text,
            p.tag,
            short_id(&p.id)
        ));
    }
    out.push(String::new());

    let q = &dash.quick;
    out.push(format!(
        "Quick: workout {} | meditation {} | learning {}",
        tick(q.workout),
        tick(q.meditation),
        tick(q.learning)
    ));
    out.push(format!(
        "Money {}: today {} | month {}",
        dash.money.month,
        format_amount(dash.money.today_total),
        format_amount(dash.money.month_total)
    ));
    out.push(format!(
        "Body: {} / {} kcal, calories left today: {}",
        dash.body.consumed, dash.body.target, dash.calories_left
    ));
    out.push(format!(
        "Mind: {} min, {}",
        dash.mind.mins,
        if dash.mind.done { "done" } else { "not done" }
    ));
    if dash.growth.topic.is_empty() {
        out.push(format!("Growth: {} min", dash.growth.mins));
    } else {
        out.push(format!("Growth: {} min on {}", dash.growth.mins, dash.growth.topic));
    }
    if !dash.notes.top3.is_empty() {
        out.push(String::new());
        out.push("Top 3:".to_string());
        out.extend(dash.notes.top3.lines().map(|l| format!("  {l}")));
    }
    out.join("\n")
}

fn tick(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use keepchain_core::PersistedState;

    #[test]
    fn render_empty_dashboard() {
        let dash = Dashboard::build(&PersistedState::default(), "2024-09-03".parse().unwrap(), 5);
        let text = render(&dash);
        assert!(text.contains("Status: Pending"));
        assert!(text.contains("Last 5 days: ....[.]"));
        assert!(text.contains("calories left today: 1800"));
        assert!(!text.contains("Top 3:"));
    }

    #[test]
    fn short_id_handles_short_strings() {
        assert_eq!(short_id("abc"), "abc");
        assert_eq!(short_id("0123456789"), "01234567");
    }
}
