// crates/ewp2cmake/src/renderer/chip.rs

//! Maps a chip selector to the processor core and FPU passed to the compiler.

use log::warn;

/// FPU used for every Cortex family unless the family overrides it.
pub const DEFAULT_FPU: &str = "VFPv4_sp";

/// Core written into the output when no family matches.
pub const UNKNOWN_CORE: &str = "unknown";

/// One row of the chip family table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreFamily {
    /// Substrings identifying the family inside the chip selector.
    pub prefixes: &'static [&'static str],
    pub core: &'static str,
    pub fpu: &'static str,
}

/// Known chip families, scanned in order. The first row with a prefix
/// contained in the chip selector wins.
pub const CORE_FAMILIES: &[CoreFamily] = &[
    CoreFamily { prefixes: &["STM32F0"], core: "Cortex-M0", fpu: DEFAULT_FPU },
    CoreFamily { prefixes: &["STM32F1", "STM32F2"], core: "Cortex-M3", fpu: DEFAULT_FPU },
    CoreFamily { prefixes: &["STM32F3", "STM32F4"], core: "Cortex-M4", fpu: DEFAULT_FPU },
    CoreFamily { prefixes: &["STM32F7"], core: "Cortex-M7", fpu: DEFAULT_FPU },
    CoreFamily { prefixes: &["STM32L0"], core: "Cortex-M0plus", fpu: DEFAULT_FPU },
    CoreFamily { prefixes: &["STM32L1"], core: "Cortex-M3", fpu: DEFAULT_FPU },
    CoreFamily { prefixes: &["STM32L4"], core: "Cortex-M4", fpu: DEFAULT_FPU },
    CoreFamily { prefixes: &["STR912F", "STR91x"], core: "ARM966E-S", fpu: "None" },
];

/// The derived core/FPU pair for a chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreSelection {
    pub core: &'static str,
    pub fpu: &'static str,
    /// `false` when the chip matched no known family.
    pub matched: bool,
}

/// Looks the chip up in [`CORE_FAMILIES`].
///
/// An unknown chip is not an error: the core becomes `"unknown"`, the default
/// FPU is kept and a warning is logged.
pub fn derive_core(chip: &str) -> CoreSelection {
    let family = CORE_FAMILIES
        .iter()
        .find(|family| family.prefixes.iter().any(|prefix| chip.contains(*prefix)));

    match family {
        Some(family) => CoreSelection {
            core: family.core,
            fpu: family.fpu,
            matched: true,
        },
        None => {
            warn!("CPU core could not be determined for chip: {}", chip);
            CoreSelection {
                core: UNKNOWN_CORE,
                fpu: DEFAULT_FPU,
                matched: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stm32f4() {
        let selection = derive_core("STM32F407VG");
        assert_eq!(selection.core, "Cortex-M4");
        assert_eq!(selection.fpu, "VFPv4_sp");
        assert!(selection.matched);
    }

    #[test]
    fn test_str912_overrides_fpu() {
        let selection = derive_core("STR912FW44");
        assert_eq!(selection.core, "ARM966E-S");
        assert_eq!(selection.fpu, "None");
        assert!(selection.matched);

        assert_eq!(derive_core("ST STR91xFAx44").core, "ARM966E-S");
    }

    #[test]
    fn test_unknown_chip() {
        let selection = derive_core("UNKNOWNCHIP");
        assert_eq!(selection.core, "unknown");
        assert_eq!(selection.fpu, DEFAULT_FPU);
        assert!(!selection.matched);
    }

    #[test]
    fn test_family_table() {
        let cases = [
            ("STM32F030R8", "Cortex-M0"),
            ("STM32F103C8", "Cortex-M3"),
            ("STM32F207ZG", "Cortex-M3"),
            ("STM32F303RE", "Cortex-M4"),
            ("STM32F746NG", "Cortex-M7"),
            ("STM32L053R8", "Cortex-M0plus"),
            ("STM32L152RE", "Cortex-M3"),
            ("STM32L476RG", "Cortex-M4"),
        ];
        for (chip, core) in cases {
            assert_eq!(derive_core(chip).core, core, "chip {}", chip);
        }
    }

    #[test]
    fn test_matches_inside_full_selector() {
        // The IDE stores "<device>\t<vendor> <device>".
        let selection = derive_core("STM32F407VG\tST STM32F407VG");
        assert_eq!(selection.core, "Cortex-M4");
    }
}
