use crate::terminal::colors;
use colored::*;
use kaprekar_common::numeral::Numeral;
use kaprekar_core::routine::Step;

type Detail = (String, ColoredString);

pub fn numeral(n: Numeral) -> ColoredString {
    if n == Numeral::KAPREKAR {
        n.to_string().color(colors::CONSTANT).bold()
    } else {
        n.to_string().color(colors::ACCENT)
    }
}

pub fn step_to_details(step: &Step) -> Vec<Detail> {
    vec![
        (String::from("Largest"), step.largest.to_string().color(colors::LARGEST)),
        (String::from("Smallest"), step.smallest.to_string().color(colors::SMALLEST)),
        (String::from("Difference"), step.difference.to_string().color(colors::DIFFERENCE)),
        (String::from("Next"), numeral(step.next())),
    ]
}

/// Joins numerals, appending `...` when more than `limit` were given.
pub fn numeral_list(numerals: &[Numeral], limit: usize) -> String {
    let shown: Vec<String> = numerals.iter().take(limit).map(|n| n.to_string()).collect();
    let ellipsis = if numerals.len() > limit { ", ..." } else { "" };
    format!("{}{}", shown.join(", "), ellipsis)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
