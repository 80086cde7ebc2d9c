//! Natural, locale-style ordering for file names.
//!
//! Digit runs compare by numeric value, letters compare case-insensitively,
//! and punctuation sorts before digits, which sort before letters. Remaining
//! ties put lowercase before uppercase, then fall back to byte order.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

fn class(c: char) -> u8 {
    if c.is_numeric() {
        1
    } else if c.is_alphabetic() {
        2
    } else {
        0
    }
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn digit_run(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

fn compare_numbers(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn primary(a: &str, b: &str) -> Ordering {
    let mut ia = a.chars().peekable();
    let mut ib = b.chars().peekable();
    loop {
        match (ia.peek().copied(), ib.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) if ca.is_ascii_digit() && cb.is_ascii_digit() => {
                let ord = compare_numbers(&digit_run(&mut ia), &digit_run(&mut ib));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(ca), Some(cb)) => {
                let ord = (class(ca), fold(ca)).cmp(&(class(cb), fold(cb)));
                if ord != Ordering::Equal {
                    return ord;
                }
                ia.next();
                ib.next();
            }
        }
    }
}

fn case_order(a: &str, b: &str) -> Ordering {
    a.chars()
        .zip(b.chars())
        .find(|(ca, cb)| ca != cb)
        .map(|(ca, cb)| ca.is_uppercase().cmp(&cb.is_uppercase()))
        .unwrap_or(Ordering::Equal)
}

pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    primary(a, b)
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}
