use bitword::{BitWord, BitWordError, NegativeEnd};

fn main() {
    println!("=== Bitword Examples ===\n");

    let _ = example_round_trip();
    let _ = example_random_access();
    let _ = example_divergence();
}

fn example_round_trip() -> Result<(), BitWordError> {
    println!("Example 1: Splitting bytes into words");

    for width in [1, 2, 4, 8] {
        let bw = BitWord::new(width)?;
        let words = bw.encode("我".as_bytes());
        let back = bw.decode(&words)?;
        println!("  width {}: {:?} -> {:?}", width, words, back);
    }
    println!();

    Ok(())
}

fn example_random_access() -> Result<(), BitWordError> {
    println!("Example 2: Reading one word in place");

    let nibbles = BitWord::NIBBLE;
    for i in 0..nibbles.total_words(b"abc") {
        println!("  nibble {}: {:#x}", i, nibbles.word_at(b"abc", i)?);
    }
    if let Err(e) = nibbles.word_at(b"abc", 6) {
        println!("  nibble 6: {}", e);
    }
    println!();

    Ok(())
}

fn example_divergence() -> Result<(), BitWordError> {
    println!("Example 3: First differing word");

    let bits = BitWord::BIT;
    println!("  'a' vs 'b' (bits): {}", bits.first_divergence(b"a", b"b", 0, 8)?);
    println!(
        "  'aac' vs 'ab' (nibbles): {}",
        BitWord::NIBBLE.first_divergence(b"aac", b"ab", 0, 100)?
    );

    let legacy = BitWord::NIBBLE.with_negative_end(NegativeEnd::ClampToLength);
    println!(
        "  negative end, legacy clamp: {}",
        legacy.first_divergence(b"aaa", b"aaa", 0, -1)?
    );
    if let Err(e) = BitWord::NIBBLE.first_divergence(b"aaa", b"aaa", 0, -1) {
        println!("  negative end, strict: {}", e);
    }

    Ok(())
}
