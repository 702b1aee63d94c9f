// Common bit tricks applied to a single byte

use super::scene::{BitScene, Scene, Snapshot};

const NUMBER: u8 = 42;

fn bin(value: u8) -> String {
    format!("{:08b}", value)
}

fn bit(position: u32) -> u8 {
    1u8 << position
}

fn step(
    operation: &'static str,
    value: u8,
    highlight: u8,
    result: String,
    expression: Option<String>,
    description: String,
) -> Snapshot {
    Snapshot::new(
        description,
        Scene::Bits(BitScene {
            operation,
            value,
            highlight,
            result,
            expression,
        }),
    )
}

pub fn bit_tricks() -> Vec<Snapshot> {
    let n = NUMBER;
    let mut steps = Vec::new();

    steps.push(step(
        "Original number",
        n,
        0,
        n.to_string(),
        None,
        format!("The decimal number {} in binary is {}", n, bin(n)),
    ));

    let ones = n.count_ones();
    steps.push(step(
        "Count set bits",
        n,
        n,
        ones.to_string(),
        None,
        format!("{} has {} bits set to 1", bin(n), ones),
    ));

    let cleared_lowest = n & n.wrapping_sub(1);
    let is_power = n != 0 && cleared_lowest == 0;
    steps.push(step(
        "Is power of two",
        n,
        u8::MAX,
        if is_power { "Yes" } else { "No" }.to_string(),
        Some(format!(
            "{} & ({} - 1) = {} & {} = {}",
            n,
            n,
            bin(n),
            bin(n.wrapping_sub(1)),
            bin(cleared_lowest)
        )),
        format!(
            "A power of two has exactly one bit set: n & (n - 1) == 0 is {}",
            is_power
        ),
    ));

    let got = (n >> 3) & 1;
    steps.push(step(
        "Get bit 3",
        n,
        bit(3),
        got.to_string(),
        Some(format!("({} >> 3) & 1 = {}", n, got)),
        format!("Shift right by 3 and mask with 1: bit 3 is {}", got),
    ));

    let set = n | bit(2);
    steps.push(step(
        "Set bit 2",
        set,
        bit(2),
        set.to_string(),
        Some(format!("{} | (1 << 2) = {} | {} = {}", n, bin(n), bin(bit(2)), bin(set))),
        format!("OR with 1 << 2 sets bit 2: {}", set),
    ));

    let cleared = n & !bit(1);
    steps.push(step(
        "Clear bit 1",
        cleared,
        bit(1),
        cleared.to_string(),
        Some(format!("{} & !(1 << 1) = {} & {} = {}", n, bin(n), bin(!bit(1)), bin(cleared))),
        format!("AND with the inverted mask clears bit 1: {}", cleared),
    ));

    let toggled = n ^ bit(5);
    steps.push(step(
        "Toggle bit 5",
        toggled,
        bit(5),
        toggled.to_string(),
        Some(format!("{} ^ (1 << 5) = {} ^ {} = {}", n, bin(n), bin(bit(5)), bin(toggled))),
        format!("XOR with 1 << 5 flips bit 5: {}", toggled),
    ));

    let lowest = n & n.wrapping_neg();
    steps.push(step(
        "Lowest set bit",
        n,
        lowest,
        lowest.to_string(),
        Some(format!("{} & -{} = {}", n, n, bin(lowest))),
        format!("n & -n isolates the lowest set bit: {}", lowest),
    ));

    steps.push(step(
        "Summary",
        n,
        0,
        n.to_string(),
        None,
        "Bit manipulation walkthrough complete".to_string(),
    ));
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(snapshot: &Snapshot) -> &BitScene {
        match &snapshot.scene {
            Scene::Bits(b) => b,
            other => panic!("unexpected scene {:?}", other),
        }
    }

    #[test]
    fn test_bit_results() {
        let steps = bit_tricks();
        let results: Vec<&str> = steps.iter().map(|s| bits(s).result.as_str()).collect();
        assert_eq!(
            results,
            vec!["42", "3", "No", "1", "46", "40", "10", "2", "42"]
        );
    }
}
