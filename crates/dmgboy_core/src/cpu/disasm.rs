use super::{Bus, CB_OPCODES, CB_PREFIX, OPCODES};

/// Format the instruction at `addr` and return it with its length in bytes.
///
/// Immediate placeholders in the mnemonic (`d8`, `d16`, `a8`, `a16`, `r8`)
/// are replaced with the operand bytes that follow the opcode. Reads go
/// through `bus`, so pass something side-effect free (such as the machine's
/// peek view) when inspecting live state.
pub fn disassemble<B: Bus + ?Sized>(bus: &mut B, addr: u16) -> (String, u16) {
    let opcode = bus.read8(addr);
    if opcode == CB_PREFIX {
        let cb = bus.read8(addr.wrapping_add(1));
        let instruction = &CB_OPCODES[cb as usize];
        return (instruction.mnemonic.to_string(), u16::from(instruction.length));
    }

    let instruction = &OPCODES[opcode as usize];
    let length = u16::from(instruction.length);
    let operand8 = bus.read8(addr.wrapping_add(1));
    let operand16 = u16::from_le_bytes([operand8, bus.read8(addr.wrapping_add(2))]);
    let next = addr.wrapping_add(length);

    let text = instruction.mnemonic;
    let text = if text.contains("a16") {
        text.replace("a16", &format!("${:04X}", operand16))
    } else if text.contains("d16") {
        text.replace("d16", &format!("${:04X}", operand16))
    } else if text.starts_with("JR") {
        let target = next.wrapping_add(operand8 as i8 as i16 as u16);
        text.replace("r8", &format!("${:04X}", target))
    } else if text.contains("r8") {
        text.replace("r8", &format!("{}", operand8 as i8))
    } else if text.contains("a8") {
        text.replace("a8", &format!("$FF{:02X}", operand8))
    } else if text.contains("d8") {
        text.replace("d8", &format!("${:02X}", operand8))
    } else {
        text.to_string()
    };
    (text, length)
}
