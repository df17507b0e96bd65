//! Stanza tables for presenting calculator outcomes on a console.

use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::arb::ArbOutcome;
use crate::display::{DisplayCurrency, DisplayPercent};
use crate::freebet::FreeBetOutcome;
use crate::market::Market;
use crate::odds::Conversion;

fn metrics_table() -> Table {
    Table::default().with_cols(vec![
        Col::new(Styles::default().with(MinWidth(20))),
        Col::new(Styles::default().with(MinWidth(12)).with(HAlign::Right)),
    ])
}

fn metric_row(label: &str, value: String) -> Row {
    Row::new(Styles::default(), vec![label.into(), value.into()])
}

pub fn tabulate_conversion(conversion: &Conversion) -> Table {
    metrics_table()
        .with_row(metric_row("Decimal", format!("{:.3}", conversion.decimal)))
        .with_row(metric_row("American", conversion.american.clone()))
        .with_row(metric_row("Fractional", conversion.fractional.clone()))
        .with_row(metric_row(
            "Implied probability",
            DisplayPercent(conversion.implied_percent).to_string(),
        ))
}

pub fn tabulate_arb(outcome: &ArbOutcome, symbol: &str) -> Table {
    let currency = |value| {
        DisplayCurrency { value, symbol }.to_string()
    };
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(20))),
            Col::new(Styles::default().with(MinWidth(12)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(12)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec!["".into(), "Leg 1".into(), "Leg 2".into()],
        ));
    let [leg_a, leg_b] = &outcome.legs;
    table.push_row(Row::new(
        Styles::default(),
        vec![
            "Odds".into(),
            format!("{:.3}", leg_a.odds).into(),
            format!("{:.3}", leg_b.odds).into(),
        ],
    ));
    table.push_row(Row::new(
        Styles::default(),
        vec![
            "Implied probability".into(),
            DisplayPercent(leg_a.implied_percent).to_string().into(),
            DisplayPercent(leg_b.implied_percent).to_string().into(),
        ],
    ));
    table.push_row(Row::new(
        Styles::default(),
        vec![
            "Stake".into(),
            currency(leg_a.stake).into(),
            currency(leg_b.stake).into(),
        ],
    ));
    table.push_row(Row::new(
        Styles::default(),
        vec![
            "Payout".into(),
            currency(leg_a.payout).into(),
            currency(leg_b.payout).into(),
        ],
    ));
    table.push_row(Row::new(
        Styles::default().with(Separator(true)),
        vec![
            "Total outlay".into(),
            currency(outcome.total_outlay).into(),
            "".into(),
        ],
    ));
    table.push_row(Row::new(
        Styles::default(),
        vec![
            "Guaranteed return".into(),
            currency(outcome.guaranteed_return).into(),
            "".into(),
        ],
    ));
    table.push_row(Row::new(
        Styles::default(),
        vec![
            "Profit".into(),
            currency(outcome.profit).into(),
            "".into(),
        ],
    ));
    table.push_row(Row::new(
        Styles::default(),
        vec![
            "ROI".into(),
            DisplayPercent(outcome.roi_percent).to_string().into(),
            "".into(),
        ],
    ));
    table.push_row(Row::new(
        Styles::default(),
        vec![
            "Arbitrage".into(),
            if outcome.is_arb { "yes" } else { "no" }.into(),
            "".into(),
        ],
    ));
    table
}

pub fn tabulate_freebet(outcome: &FreeBetOutcome, symbol: &str) -> Table {
    let currency = |value| {
        DisplayCurrency { value, symbol }.to_string()
    };
    metrics_table()
        .with_row(metric_row("Lay stake", currency(outcome.lay_stake)))
        .with_row(metric_row("Liability", currency(outcome.liability)))
        .with_row(metric_row(
            "Back-win profit",
            currency(outcome.back_win_profit),
        ))
        .with_row(metric_row(
            "Lay-win profit",
            currency(outcome.lay_win_profit),
        ))
        .with_row(metric_row(
            "Guaranteed profit",
            currency(outcome.guaranteed_profit),
        ))
        .with_row(metric_row(
            "Conversion rate",
            DisplayPercent(outcome.conversion_percent).to_string(),
        ))
}

pub fn tabulate_vig(market: &Market) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Centred)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(12)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(12)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec![
                "Outcome".into(),
                "Price".into(),
                "Implied".into(),
                "True".into(),
                "Fair price".into(),
            ],
        ));
    let fair_prices = market.fair_prices();
    for (index, &price) in market.prices.iter().enumerate() {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{}", index + 1).into(),
                format!("{price:.3}").into(),
                DisplayPercent(100.0 / price).to_string().into(),
                DisplayPercent(market.probs[index] * 100.0).to_string().into(),
                format!("{:.3}", fair_prices[index]).into(),
            ],
        ));
    }
    table.push_row(Row::new(
        Styles::default().with(Separator(true)),
        vec![
            "Total vig".into(),
            DisplayPercent(market.vig_percent()).to_string().into(),
            "".into(),
            "".into(),
            "".into(),
        ],
    ));
    table
}
