use fixedbit::FixedBitVector;

fn main() -> anyhow::Result<()> {
    let flags = FixedBitVector::from_int(8, 5)?;
    let mut word = FixedBitVector::from_int(32, 1)?;

    for pos in 24..32 {
        word.clear_bit(pos)?;
    }

    println!("{flags}, {word}");
    Ok(())
}
