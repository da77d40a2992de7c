// crates/ewp2cmake/tests/common/mod.rs

//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

/// A trimmed-down STM32CubeMX-generated EWARM project with two configurations.
///
/// The `Drivers` group lists its subgroup before its files on purpose.
pub const SAMPLE_EWP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
    <fileVersion>3</fileVersion>
    <configuration>
        <name>Debug</name>
        <toolchain>
            <name>ARM</name>
        </toolchain>
        <debug>1</debug>
        <settings>
            <name>General</name>
            <archiveVersion>3</archiveVersion>
            <data>
                <version>35</version>
                <wantNonLocal>1</wantNonLocal>
                <debug>1</debug>
                <option>
                    <name>OGChipSelectEditMenu</name>
                    <state>STM32F407VG&#9;ST STM32F407VG</state>
                </option>
                <option>
                    <name>RTConfigPath2</name>
                    <state>$TOOLKIT_DIR$\inc\c\DLib_Config_Full.h</state>
                </option>
                <option>
                    <name>GOutputBinary</name>
                    <state>0</state>
                </option>
            </data>
        </settings>
        <settings>
            <name>ICCARM</name>
            <archiveVersion>2</archiveVersion>
            <data>
                <version>37</version>
                <wantNonLocal>1</wantNonLocal>
                <debug>1</debug>
                <option>
                    <name>CCDefines</name>
                    <state>USE_HAL_DRIVER</state>
                    <state>STM32F407xx</state>
                </option>
                <option>
                    <name>CCDiagSuppress</name>
                    <state>Pa050</state>
                </option>
                <option>
                    <name>CCDiagError</name>
                    <state></state>
                </option>
                <option>
                    <name>CCOptLevel</name>
                    <state>1</state>
                </option>
                <option>
                    <name>CCIncludePath2</name>
                    <state>$PROJ_DIR$/../Core/Inc</state>
                    <state>$PROJ_DIR$/../Drivers/CMSIS/Include</state>
                </option>
            </data>
        </settings>
        <settings>
            <name>ILINK</name>
            <archiveVersion>0</archiveVersion>
            <data>
                <version>24</version>
                <wantNonLocal>1</wantNonLocal>
                <debug>1</debug>
                <option>
                    <name>IlinkIcfFile</name>
                    <state>$PROJ_DIR$\stm32f407xx_flash.icf</state>
                </option>
                <option>
                    <name>IlinkKeepSymbols</name>
                    <state>__vector_table</state>
                    <state></state>
                    <state>__iar_program_start</state>
                </option>
            </data>
        </settings>
    </configuration>
    <configuration>
        <name>Release</name>
        <toolchain>
            <name>ARM</name>
        </toolchain>
        <debug>0</debug>
        <settings>
            <name>ICCARM</name>
            <archiveVersion>2</archiveVersion>
            <data>
                <version>37</version>
                <wantNonLocal>1</wantNonLocal>
                <debug>0</debug>
                <option>
                    <name>CCDefines</name>
                    <state>NDEBUG</state>
                </option>
            </data>
        </settings>
    </configuration>
    <group>
        <name>Application</name>
        <group>
            <name>User</name>
            <file>
                <name>$PROJ_DIR$\..\Core\Src\main.c</name>
            </file>
            <file>
                <name>$PROJ_DIR$\..\Core\Src\stm32f4xx_it.c</name>
            </file>
        </group>
        <group>
            <name>EWARM</name>
            <file>
                <name>$PROJ_DIR$\startup_stm32f407xx.s</name>
            </file>
        </group>
    </group>
    <group>
        <name>Drivers</name>
        <group>
            <name>Legacy</name>
            <excluded>
                <configuration>Debug</configuration>
            </excluded>
            <file>
                <name>$PROJ_DIR$\..\Legacy\old_driver.c</name>
            </file>
        </group>
        <file>
            <name>$PROJ_DIR$\..\Drivers\hal.c</name>
        </file>
        <file>
            <name>$PROJ_DIR$\..\Drivers\unused.c</name>
            <excluded>
                <configuration>Debug</configuration>
                <configuration>Release</configuration>
            </excluded>
        </file>
        <file>
            <name>$PROJ_DIR$\..\Lib\libmath.a</name>
        </file>
    </group>
</project>
"#;

/// Sources expected from `SAMPLE_EWP`, in traversal order.
pub const SAMPLE_SOURCES: [&str; 5] = [
    "../Core/Src/main.c",
    "../Core/Src/stm32f4xx_it.c",
    "startup_stm32f407xx.s",
    "../Drivers/hal.c",
    "../Lib/libmath.a",
];

/// Contents of `.vscode/iar-vsc.json` for the fixtures.
pub const SAMPLE_SETTINGS: &str = r#"{
    "workbench": { "path": "C:\\Program Files\\IAR Systems\\EW ARM 9.40" },
    "project": { "path": "EWARM\\blinky.ewp" },
    "config": { "name": "Debug" }
}"#;

/// The `templates/` directory shipped at the workspace root.
pub fn templates_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop();
    path.pop();
    path.push("templates");
    path
}
