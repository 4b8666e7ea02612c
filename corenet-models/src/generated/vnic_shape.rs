//! VnicShape enumeration for the Core Services API
//!
//! DO NOT EDIT MANUALLY - regenerate with corenet-codegen

use corenet_core::string_enum;

string_enum! {
    /// Performance and placement class of a VNIC, used to allocate its resources in the data plane.
    pub enum VnicShape {
        Dynamic => "DYNAMIC",
        Fixed0040 => "FIXED0040",
        Fixed0060 => "FIXED0060",
        Fixed0060Psm => "FIXED0060_PSM",
        Fixed0100 => "FIXED0100",
        Fixed0120 => "FIXED0120",
        Fixed01202x => "FIXED0120_2X",
        Fixed0200 => "FIXED0200",
        Fixed0240 => "FIXED0240",
        Fixed0480 => "FIXED0480",
        Entirehost => "ENTIREHOST",
        Dynamic25g => "DYNAMIC_25G",
        Fixed004025g => "FIXED0040_25G",
        Fixed010025g => "FIXED0100_25G",
        Fixed020025g => "FIXED0200_25G",
        Fixed040025g => "FIXED0400_25G",
        Fixed080025g => "FIXED0800_25G",
        Fixed160025g => "FIXED1600_25G",
        Fixed240025g => "FIXED2400_25G",
        Entirehost25g => "ENTIREHOST_25G",
        DynamicE125g => "DYNAMIC_E1_25G",
        Fixed0040E125g => "FIXED0040_E1_25G",
        Fixed0070E125g => "FIXED0070_E1_25G",
        Fixed0140E125g => "FIXED0140_E1_25G",
        Fixed0280E125g => "FIXED0280_E1_25G",
        Fixed0560E125g => "FIXED0560_E1_25G",
        Fixed1120E125g => "FIXED1120_E1_25G",
        Fixed1680E125g => "FIXED1680_E1_25G",
        EntirehostE125g => "ENTIREHOST_E1_25G",
        DynamicB125g => "DYNAMIC_B1_25G",
        Fixed0040B125g => "FIXED0040_B1_25G",
        Fixed0060B125g => "FIXED0060_B1_25G",
        Fixed0120B125g => "FIXED0120_B1_25G",
        Fixed0240B125g => "FIXED0240_B1_25G",
        Fixed0480B125g => "FIXED0480_B1_25G",
        Fixed0960B125g => "FIXED0960_B1_25G",
        EntirehostB125g => "ENTIREHOST_B1_25G",
        MicroVmFixed0048E125g => "MICRO_VM_FIXED0048_E1_25G",
        MicroLbFixed0001E125g => "MICRO_LB_FIXED0001_E1_25G",
        VnicaasFixed0200 => "VNICAAS_FIXED0200",
        VnicaasFixed0400 => "VNICAAS_FIXED0400",
        VnicaasFixed0700 => "VNICAAS_FIXED0700",
        VnicaasNlbApproved10g => "VNICAAS_NLB_APPROVED_10G",
        VnicaasNlbApproved25g => "VNICAAS_NLB_APPROVED_25G",
        VnicaasTelesis25g => "VNICAAS_TELESIS_25G",
        VnicaasTelesis10g => "VNICAAS_TELESIS_10G",
        VnicaasAmbassadorFixed0100 => "VNICAAS_AMBASSADOR_FIXED0100",
        VnicaasPrivatedns => "VNICAAS_PRIVATEDNS",
        VnicaasFwaas => "VNICAAS_FWAAS",
        DynamicE350g => "DYNAMIC_E3_50G",
        Fixed0040E350g => "FIXED0040_E3_50G",
        Fixed0100E350g => "FIXED0100_E3_50G",
        Fixed0200E350g => "FIXED0200_E3_50G",
        Fixed0300E350g => "FIXED0300_E3_50G",
        Fixed0400E350g => "FIXED0400_E3_50G",
        Fixed0500E350g => "FIXED0500_E3_50G",
        Fixed0600E350g => "FIXED0600_E3_50G",
        Fixed0700E350g => "FIXED0700_E3_50G",
        Fixed0800E350g => "FIXED0800_E3_50G",
        Fixed0900E350g => "FIXED0900_E3_50G",
        Fixed1000E350g => "FIXED1000_E3_50G",
        Fixed1100E350g => "FIXED1100_E3_50G",
        Fixed1200E350g => "FIXED1200_E3_50G",
        Fixed1300E350g => "FIXED1300_E3_50G",
        Fixed1400E350g => "FIXED1400_E3_50G",
        Fixed1500E350g => "FIXED1500_E3_50G",
        Fixed1600E350g => "FIXED1600_E3_50G",
        Fixed1700E350g => "FIXED1700_E3_50G",
        Fixed1800E350g => "FIXED1800_E3_50G",
        Fixed1900E350g => "FIXED1900_E3_50G",
        Fixed2000E350g => "FIXED2000_E3_50G",
        Fixed2100E350g => "FIXED2100_E3_50G",
        Fixed2200E350g => "FIXED2200_E3_50G",
        Fixed2300E350g => "FIXED2300_E3_50G",
        Fixed2400E350g => "FIXED2400_E3_50G",
        Fixed2500E350g => "FIXED2500_E3_50G",
        Fixed2600E350g => "FIXED2600_E3_50G",
        Fixed2700E350g => "FIXED2700_E3_50G",
        Fixed2800E350g => "FIXED2800_E3_50G",
        Fixed2900E350g => "FIXED2900_E3_50G",
        Fixed3000E350g => "FIXED3000_E3_50G",
        Fixed3100E350g => "FIXED3100_E3_50G",
        Fixed3200E350g => "FIXED3200_E3_50G",
        Fixed3300E350g => "FIXED3300_E3_50G",
        Fixed3400E350g => "FIXED3400_E3_50G",
        Fixed3500E350g => "FIXED3500_E3_50G",
        Fixed3600E350g => "FIXED3600_E3_50G",
        Fixed3700E350g => "FIXED3700_E3_50G",
        Fixed3800E350g => "FIXED3800_E3_50G",
        Fixed3900E350g => "FIXED3900_E3_50G",
        Fixed4000E350g => "FIXED4000_E3_50G",
        EntirehostE350g => "ENTIREHOST_E3_50G",
        DynamicE450g => "DYNAMIC_E4_50G",
        Fixed0040E450g => "FIXED0040_E4_50G",
        Fixed0100E450g => "FIXED0100_E4_50G",
        Fixed0200E450g => "FIXED0200_E4_50G",
        Fixed0300E450g => "FIXED0300_E4_50G",
        Fixed0400E450g => "FIXED0400_E4_50G",
        Fixed0500E450g => "FIXED0500_E4_50G",
        Fixed0600E450g => "FIXED0600_E4_50G",
        Fixed0700E450g => "FIXED0700_E4_50G",
        Fixed0800E450g => "FIXED0800_E4_50G",
        Fixed0900E450g => "FIXED0900_E4_50G",
        Fixed1000E450g => "FIXED1000_E4_50G",
        Fixed1100E450g => "FIXED1100_E4_50G",
        Fixed1200E450g => "FIXED1200_E4_50G",
        Fixed1300E450g => "FIXED1300_E4_50G",
        Fixed1400E450g => "FIXED1400_E4_50G",
        Fixed1500E450g => "FIXED1500_E4_50G",
        Fixed1600E450g => "FIXED1600_E4_50G",
        Fixed1700E450g => "FIXED1700_E4_50G",
        Fixed1800E450g => "FIXED1800_E4_50G",
        Fixed1900E450g => "FIXED1900_E4_50G",
        Fixed2000E450g => "FIXED2000_E4_50G",
        Fixed2100E450g => "FIXED2100_E4_50G",
        Fixed2200E450g => "FIXED2200_E4_50G",
        Fixed2300E450g => "FIXED2300_E4_50G",
        Fixed2400E450g => "FIXED2400_E4_50G",
        Fixed2500E450g => "FIXED2500_E4_50G",
        Fixed2600E450g => "FIXED2600_E4_50G",
        Fixed2700E450g => "FIXED2700_E4_50G",
        Fixed2800E450g => "FIXED2800_E4_50G",
        Fixed2900E450g => "FIXED2900_E4_50G",
        Fixed3000E450g => "FIXED3000_E4_50G",
        Fixed3100E450g => "FIXED3100_E4_50G",
        Fixed3200E450g => "FIXED3200_E4_50G",
        Fixed3300E450g => "FIXED3300_E4_50G",
        Fixed3400E450g => "FIXED3400_E4_50G",
        Fixed3500E450g => "FIXED3500_E4_50G",
        Fixed3600E450g => "FIXED3600_E4_50G",
        Fixed3700E450g => "FIXED3700_E4_50G",
        Fixed3800E450g => "FIXED3800_E4_50G",
        Fixed3900E450g => "FIXED3900_E4_50G",
        Fixed4000E450g => "FIXED4000_E4_50G",
        EntirehostE450g => "ENTIREHOST_E4_50G",
        MicroVmFixed0050E350g => "MICRO_VM_FIXED0050_E3_50G",
        SubcoreVmFixed0025E350g => "SUBCORE_VM_FIXED0025_E3_50G",
        SubcoreVmFixed0050E350g => "SUBCORE_VM_FIXED0050_E3_50G",
        SubcoreVmFixed0075E350g => "SUBCORE_VM_FIXED0075_E3_50G",
        SubcoreVmFixed0100E350g => "SUBCORE_VM_FIXED0100_E3_50G",
        SubcoreVmFixed0125E350g => "SUBCORE_VM_FIXED0125_E3_50G",
        SubcoreVmFixed0150E350g => "SUBCORE_VM_FIXED0150_E3_50G",
        SubcoreVmFixed0175E350g => "SUBCORE_VM_FIXED0175_E3_50G",
        SubcoreVmFixed0200E350g => "SUBCORE_VM_FIXED0200_E3_50G",
        SubcoreVmFixed0225E350g => "SUBCORE_VM_FIXED0225_E3_50G",
        SubcoreVmFixed0250E350g => "SUBCORE_VM_FIXED0250_E3_50G",
        SubcoreVmFixed0275E350g => "SUBCORE_VM_FIXED0275_E3_50G",
        SubcoreVmFixed0300E350g => "SUBCORE_VM_FIXED0300_E3_50G",
        SubcoreVmFixed0325E350g => "SUBCORE_VM_FIXED0325_E3_50G",
        SubcoreVmFixed0350E350g => "SUBCORE_VM_FIXED0350_E3_50G",
        SubcoreVmFixed0375E350g => "SUBCORE_VM_FIXED0375_E3_50G",
        SubcoreVmFixed0400E350g => "SUBCORE_VM_FIXED0400_E3_50G",
        SubcoreVmFixed0425E350g => "SUBCORE_VM_FIXED0425_E3_50G",
        SubcoreVmFixed0450E350g => "SUBCORE_VM_FIXED0450_E3_50G",
        SubcoreVmFixed0475E350g => "SUBCORE_VM_FIXED0475_E3_50G",
        SubcoreVmFixed0500E350g => "SUBCORE_VM_FIXED0500_E3_50G",
        SubcoreVmFixed0525E350g => "SUBCORE_VM_FIXED0525_E3_50G",
        SubcoreVmFixed0550E350g => "SUBCORE_VM_FIXED0550_E3_50G",
        SubcoreVmFixed0575E350g => "SUBCORE_VM_FIXED0575_E3_50G",
        SubcoreVmFixed0600E350g => "SUBCORE_VM_FIXED0600_E3_50G",
        SubcoreVmFixed0625E350g => "SUBCORE_VM_FIXED0625_E3_50G",
        SubcoreVmFixed0650E350g => "SUBCORE_VM_FIXED0650_E3_50G",
        SubcoreVmFixed0675E350g => "SUBCORE_VM_FIXED0675_E3_50G",
        SubcoreVmFixed0700E350g => "SUBCORE_VM_FIXED0700_E3_50G",
        SubcoreVmFixed0725E350g => "SUBCORE_VM_FIXED0725_E3_50G",
        SubcoreVmFixed0750E350g => "SUBCORE_VM_FIXED0750_E3_50G",
        SubcoreVmFixed0775E350g => "SUBCORE_VM_FIXED0775_E3_50G",
        SubcoreVmFixed0800E350g => "SUBCORE_VM_FIXED0800_E3_50G",
        SubcoreVmFixed0825E350g => "SUBCORE_VM_FIXED0825_E3_50G",
        SubcoreVmFixed0850E350g => "SUBCORE_VM_FIXED0850_E3_50G",
        SubcoreVmFixed0875E350g => "SUBCORE_VM_FIXED0875_E3_50G",
        SubcoreVmFixed0900E350g => "SUBCORE_VM_FIXED0900_E3_50G",
        SubcoreVmFixed0925E350g => "SUBCORE_VM_FIXED0925_E3_50G",
        SubcoreVmFixed0950E350g => "SUBCORE_VM_FIXED0950_E3_50G",
        SubcoreVmFixed0975E350g => "SUBCORE_VM_FIXED0975_E3_50G",
        SubcoreVmFixed1000E350g => "SUBCORE_VM_FIXED1000_E3_50G",
        SubcoreVmFixed1025E350g => "SUBCORE_VM_FIXED1025_E3_50G",
        SubcoreVmFixed1050E350g => "SUBCORE_VM_FIXED1050_E3_50G",
        SubcoreVmFixed1075E350g => "SUBCORE_VM_FIXED1075_E3_50G",
        SubcoreVmFixed1100E350g => "SUBCORE_VM_FIXED1100_E3_50G",
        SubcoreVmFixed1125E350g => "SUBCORE_VM_FIXED1125_E3_50G",
        SubcoreVmFixed1150E350g => "SUBCORE_VM_FIXED1150_E3_50G",
        SubcoreVmFixed1175E350g => "SUBCORE_VM_FIXED1175_E3_50G",
        SubcoreVmFixed1200E350g => "SUBCORE_VM_FIXED1200_E3_50G",
        SubcoreVmFixed1225E350g => "SUBCORE_VM_FIXED1225_E3_50G",
        SubcoreVmFixed1250E350g => "SUBCORE_VM_FIXED1250_E3_50G",
        SubcoreVmFixed1275E350g => "SUBCORE_VM_FIXED1275_E3_50G",
        SubcoreVmFixed1300E350g => "SUBCORE_VM_FIXED1300_E3_50G",
        SubcoreVmFixed1325E350g => "SUBCORE_VM_FIXED1325_E3_50G",
        SubcoreVmFixed1350E350g => "SUBCORE_VM_FIXED1350_E3_50G",
        SubcoreVmFixed1375E350g => "SUBCORE_VM_FIXED1375_E3_50G",
        SubcoreVmFixed1400E350g => "SUBCORE_VM_FIXED1400_E3_50G",
        SubcoreVmFixed1425E350g => "SUBCORE_VM_FIXED1425_E3_50G",
        SubcoreVmFixed1450E350g => "SUBCORE_VM_FIXED1450_E3_50G",
        SubcoreVmFixed1475E350g => "SUBCORE_VM_FIXED1475_E3_50G",
        SubcoreVmFixed1500E350g => "SUBCORE_VM_FIXED1500_E3_50G",
        SubcoreVmFixed1525E350g => "SUBCORE_VM_FIXED1525_E3_50G",
        SubcoreVmFixed1550E350g => "SUBCORE_VM_FIXED1550_E3_50G",
        SubcoreVmFixed1575E350g => "SUBCORE_VM_FIXED1575_E3_50G",
        SubcoreVmFixed1600E350g => "SUBCORE_VM_FIXED1600_E3_50G",
        SubcoreVmFixed1625E350g => "SUBCORE_VM_FIXED1625_E3_50G",
        SubcoreVmFixed1650E350g => "SUBCORE_VM_FIXED1650_E3_50G",
        SubcoreVmFixed1700E350g => "SUBCORE_VM_FIXED1700_E3_50G",
        SubcoreVmFixed1725E350g => "SUBCORE_VM_FIXED1725_E3_50G",
        SubcoreVmFixed1750E350g => "SUBCORE_VM_FIXED1750_E3_50G",
        SubcoreVmFixed1800E350g => "SUBCORE_VM_FIXED1800_E3_50G",
        SubcoreVmFixed1850E350g => "SUBCORE_VM_FIXED1850_E3_50G",
        SubcoreVmFixed1875E350g => "SUBCORE_VM_FIXED1875_E3_50G",
        SubcoreVmFixed1900E350g => "SUBCORE_VM_FIXED1900_E3_50G",
        SubcoreVmFixed1925E350g => "SUBCORE_VM_FIXED1925_E3_50G",
        SubcoreVmFixed1950E350g => "SUBCORE_VM_FIXED1950_E3_50G",
        SubcoreVmFixed2000E350g => "SUBCORE_VM_FIXED2000_E3_50G",
        SubcoreVmFixed2025E350g => "SUBCORE_VM_FIXED2025_E3_50G",
        SubcoreVmFixed2050E350g => "SUBCORE_VM_FIXED2050_E3_50G",
        SubcoreVmFixed2100E350g => "SUBCORE_VM_FIXED2100_E3_50G",
        SubcoreVmFixed2125E350g => "SUBCORE_VM_FIXED2125_E3_50G",
        SubcoreVmFixed2150E350g => "SUBCORE_VM_FIXED2150_E3_50G",
        SubcoreVmFixed2175E350g => "SUBCORE_VM_FIXED2175_E3_50G",
        SubcoreVmFixed2200E350g => "SUBCORE_VM_FIXED2200_E3_50G",
        SubcoreVmFixed2250E350g => "SUBCORE_VM_FIXED2250_E3_50G",
        SubcoreVmFixed2275E350g => "SUBCORE_VM_FIXED2275_E3_50G",
        SubcoreVmFixed2300E350g => "SUBCORE_VM_FIXED2300_E3_50G",
        SubcoreVmFixed2325E350g => "SUBCORE_VM_FIXED2325_E3_50G",
        SubcoreVmFixed2350E350g => "SUBCORE_VM_FIXED2350_E3_50G",
        SubcoreVmFixed2375E350g => "SUBCORE_VM_FIXED2375_E3_50G",
        SubcoreVmFixed2400E350g => "SUBCORE_VM_FIXED2400_E3_50G",
        SubcoreVmFixed2450E350g => "SUBCORE_VM_FIXED2450_E3_50G",
        SubcoreVmFixed2475E350g => "SUBCORE_VM_FIXED2475_E3_50G",
        SubcoreVmFixed2500E350g => "SUBCORE_VM_FIXED2500_E3_50G",
        SubcoreVmFixed2550E350g => "SUBCORE_VM_FIXED2550_E3_50G",
        SubcoreVmFixed2600E350g => "SUBCORE_VM_FIXED2600_E3_50G",
        SubcoreVmFixed2625E350g => "SUBCORE_VM_FIXED2625_E3_50G",
        SubcoreVmFixed2650E350g => "SUBCORE_VM_FIXED2650_E3_50G",
        SubcoreVmFixed2700E350g => "SUBCORE_VM_FIXED2700_E3_50G",
        SubcoreVmFixed2750E350g => "SUBCORE_VM_FIXED2750_E3_50G",
        SubcoreVmFixed2775E350g => "SUBCORE_VM_FIXED2775_E3_50G",
        SubcoreVmFixed2800E350g => "SUBCORE_VM_FIXED2800_E3_50G",
        SubcoreVmFixed2850E350g => "SUBCORE_VM_FIXED2850_E3_50G",
        SubcoreVmFixed2875E350g => "SUBCORE_VM_FIXED2875_E3_50G",
        SubcoreVmFixed2900E350g => "SUBCORE_VM_FIXED2900_E3_50G",
        SubcoreVmFixed2925E350g => "SUBCORE_VM_FIXED2925_E3_50G",
        SubcoreVmFixed2950E350g => "SUBCORE_VM_FIXED2950_E3_50G",
        SubcoreVmFixed2975E350g => "SUBCORE_VM_FIXED2975_E3_50G",
        SubcoreVmFixed3000E350g => "SUBCORE_VM_FIXED3000_E3_50G",
        SubcoreVmFixed3025E350g => "SUBCORE_VM_FIXED3025_E3_50G",
        SubcoreVmFixed3050E350g => "SUBCORE_VM_FIXED3050_E3_50G",
        SubcoreVmFixed3075E350g => "SUBCORE_VM_FIXED3075_E3_50G",
        SubcoreVmFixed3100E350g => "SUBCORE_VM_FIXED3100_E3_50G",
        SubcoreVmFixed3125E350g => "SUBCORE_VM_FIXED3125_E3_50G",
        SubcoreVmFixed3150E350g => "SUBCORE_VM_FIXED3150_E3_50G",
        SubcoreVmFixed3200E350g => "SUBCORE_VM_FIXED3200_E3_50G",
        SubcoreVmFixed3225E350g => "SUBCORE_VM_FIXED3225_E3_50G",
        SubcoreVmFixed3250E350g => "SUBCORE_VM_FIXED3250_E3_50G",
        SubcoreVmFixed3300E350g => "SUBCORE_VM_FIXED3300_E3_50G",
        SubcoreVmFixed3325E350g => "SUBCORE_VM_FIXED3325_E3_50G",
        SubcoreVmFixed3375E350g => "SUBCORE_VM_FIXED3375_E3_50G",
        SubcoreVmFixed3400E350g => "SUBCORE_VM_FIXED3400_E3_50G",
        SubcoreVmFixed3450E350g => "SUBCORE_VM_FIXED3450_E3_50G",
        SubcoreVmFixed3500E350g => "SUBCORE_VM_FIXED3500_E3_50G",
        SubcoreVmFixed3525E350g => "SUBCORE_VM_FIXED3525_E3_50G",
        SubcoreVmFixed3575E350g => "SUBCORE_VM_FIXED3575_E3_50G",
        SubcoreVmFixed3600E350g => "SUBCORE_VM_FIXED3600_E3_50G",
        SubcoreVmFixed3625E350g => "SUBCORE_VM_FIXED3625_E3_50G",
        SubcoreVmFixed3675E350g => "SUBCORE_VM_FIXED3675_E3_50G",
        SubcoreVmFixed3700E350g => "SUBCORE_VM_FIXED3700_E3_50G",
        SubcoreVmFixed3750E350g => "SUBCORE_VM_FIXED3750_E3_50G",
        SubcoreVmFixed3800E350g => "SUBCORE_VM_FIXED3800_E3_50G",
        SubcoreVmFixed3825E350g => "SUBCORE_VM_FIXED3825_E3_50G",
        SubcoreVmFixed3850E350g => "SUBCORE_VM_FIXED3850_E3_50G",
        SubcoreVmFixed3875E350g => "SUBCORE_VM_FIXED3875_E3_50G",
        SubcoreVmFixed3900E350g => "SUBCORE_VM_FIXED3900_E3_50G",
        SubcoreVmFixed3975E350g => "SUBCORE_VM_FIXED3975_E3_50G",
        SubcoreVmFixed4000E350g => "SUBCORE_VM_FIXED4000_E3_50G",
        SubcoreVmFixed4025E350g => "SUBCORE_VM_FIXED4025_E3_50G",
        SubcoreVmFixed4050E350g => "SUBCORE_VM_FIXED4050_E3_50G",
        SubcoreVmFixed4100E350g => "SUBCORE_VM_FIXED4100_E3_50G",
        SubcoreVmFixed4125E350g => "SUBCORE_VM_FIXED4125_E3_50G",
        SubcoreVmFixed4200E350g => "SUBCORE_VM_FIXED4200_E3_50G",
        SubcoreVmFixed4225E350g => "SUBCORE_VM_FIXED4225_E3_50G",
        SubcoreVmFixed4250E350g => "SUBCORE_VM_FIXED4250_E3_50G",
        SubcoreVmFixed4275E350g => "SUBCORE_VM_FIXED4275_E3_50G",
        SubcoreVmFixed4300E350g => "SUBCORE_VM_FIXED4300_E3_50G",
        SubcoreVmFixed4350E350g => "SUBCORE_VM_FIXED4350_E3_50G",
        SubcoreVmFixed4375E350g => "SUBCORE_VM_FIXED4375_E3_50G",
        SubcoreVmFixed4400E350g => "SUBCORE_VM_FIXED4400_E3_50G",
        SubcoreVmFixed4425E350g => "SUBCORE_VM_FIXED4425_E3_50G",
        SubcoreVmFixed4500E350g => "SUBCORE_VM_FIXED4500_E3_50G",
        SubcoreVmFixed4550E350g => "SUBCORE_VM_FIXED4550_E3_50G",
        SubcoreVmFixed4575E350g => "SUBCORE_VM_FIXED4575_E3_50G",
        SubcoreVmFixed4600E350g => "SUBCORE_VM_FIXED4600_E3_50G",
        SubcoreVmFixed4625E350g => "SUBCORE_VM_FIXED4625_E3_50G",
        SubcoreVmFixed4650E350g => "SUBCORE_VM_FIXED4650_E3_50G",
        SubcoreVmFixed4675E350g => "SUBCORE_VM_FIXED4675_E3_50G",
        SubcoreVmFixed4700E350g => "SUBCORE_VM_FIXED4700_E3_50G",
        SubcoreVmFixed4725E350g => "SUBCORE_VM_FIXED4725_E3_50G",
        SubcoreVmFixed4750E350g => "SUBCORE_VM_FIXED4750_E3_50G",
        SubcoreVmFixed4800E350g => "SUBCORE_VM_FIXED4800_E3_50G",
        SubcoreVmFixed4875E350g => "SUBCORE_VM_FIXED4875_E3_50G",
        SubcoreVmFixed4900E350g => "SUBCORE_VM_FIXED4900_E3_50G",
        SubcoreVmFixed4950E350g => "SUBCORE_VM_FIXED4950_E3_50G",
        SubcoreVmFixed5000E350g => "SUBCORE_VM_FIXED5000_E3_50G",
        SubcoreVmFixed0025E450g => "SUBCORE_VM_FIXED0025_E4_50G",
        SubcoreVmFixed0050E450g => "SUBCORE_VM_FIXED0050_E4_50G",
        SubcoreVmFixed0075E450g => "SUBCORE_VM_FIXED0075_E4_50G",
        SubcoreVmFixed0100E450g => "SUBCORE_VM_FIXED0100_E4_50G",
        SubcoreVmFixed0125E450g => "SUBCORE_VM_FIXED0125_E4_50G",
        SubcoreVmFixed0150E450g => "SUBCORE_VM_FIXED0150_E4_50G",
        SubcoreVmFixed0175E450g => "SUBCORE_VM_FIXED0175_E4_50G",
        SubcoreVmFixed0200E450g => "SUBCORE_VM_FIXED0200_E4_50G",
        SubcoreVmFixed0225E450g => "SUBCORE_VM_FIXED0225_E4_50G",
        SubcoreVmFixed0250E450g => "SUBCORE_VM_FIXED0250_E4_50G",
        SubcoreVmFixed0275E450g => "SUBCORE_VM_FIXED0275_E4_50G",
        SubcoreVmFixed0300E450g => "SUBCORE_VM_FIXED0300_E4_50G",
        SubcoreVmFixed0325E450g => "SUBCORE_VM_FIXED0325_E4_50G",
        SubcoreVmFixed0350E450g => "SUBCORE_VM_FIXED0350_E4_50G",
        SubcoreVmFixed0375E450g => "SUBCORE_VM_FIXED0375_E4_50G",
        SubcoreVmFixed0400E450g => "SUBCORE_VM_FIXED0400_E4_50G",
        SubcoreVmFixed0425E450g => "SUBCORE_VM_FIXED0425_E4_50G",
        SubcoreVmFixed0450E450g => "SUBCORE_VM_FIXED0450_E4_50G",
        SubcoreVmFixed0475E450g => "SUBCORE_VM_FIXED0475_E4_50G",
        SubcoreVmFixed0500E450g => "SUBCORE_VM_FIXED0500_E4_50G",
        SubcoreVmFixed0525E450g => "SUBCORE_VM_FIXED0525_E4_50G",
        SubcoreVmFixed0550E450g => "SUBCORE_VM_FIXED0550_E4_50G",
        SubcoreVmFixed0575E450g => "SUBCORE_VM_FIXED0575_E4_50G",
        SubcoreVmFixed0600E450g => "SUBCORE_VM_FIXED0600_E4_50G",
        SubcoreVmFixed0625E450g => "SUBCORE_VM_FIXED0625_E4_50G",
        SubcoreVmFixed0650E450g => "SUBCORE_VM_FIXED0650_E4_50G",
        SubcoreVmFixed0675E450g => "SUBCORE_VM_FIXED0675_E4_50G",
        SubcoreVmFixed0700E450g => "SUBCORE_VM_FIXED0700_E4_50G",
        SubcoreVmFixed0725E450g => "SUBCORE_VM_FIXED0725_E4_50G",
        SubcoreVmFixed0750E450g => "SUBCORE_VM_FIXED0750_E4_50G",
        SubcoreVmFixed0775E450g => "SUBCORE_VM_FIXED0775_E4_50G",
        SubcoreVmFixed0800E450g => "SUBCORE_VM_FIXED0800_E4_50G",
        SubcoreVmFixed0825E450g => "SUBCORE_VM_FIXED0825_E4_50G",
        SubcoreVmFixed0850E450g => "SUBCORE_VM_FIXED0850_E4_50G",
        SubcoreVmFixed0875E450g => "SUBCORE_VM_FIXED0875_E4_50G",
        SubcoreVmFixed0900E450g => "SUBCORE_VM_FIXED0900_E4_50G",
        SubcoreVmFixed0925E450g => "SUBCORE_VM_FIXED0925_E4_50G",
        SubcoreVmFixed0950E450g => "SUBCORE_VM_FIXED0950_E4_50G",
        SubcoreVmFixed0975E450g => "SUBCORE_VM_FIXED0975_E4_50G",
        SubcoreVmFixed1000E450g => "SUBCORE_VM_FIXED1000_E4_50G",
        SubcoreVmFixed1025E450g => "SUBCORE_VM_FIXED1025_E4_50G",
        SubcoreVmFixed1050E450g => "SUBCORE_VM_FIXED1050_E4_50G",
        SubcoreVmFixed1075E450g => "SUBCORE_VM_FIXED1075_E4_50G",
        SubcoreVmFixed1100E450g => "SUBCORE_VM_FIXED1100_E4_50G",
        SubcoreVmFixed1125E450g => "SUBCORE_VM_FIXED1125_E4_50G",
        SubcoreVmFixed1150E450g => "SUBCORE_VM_FIXED1150_E4_50G",
        SubcoreVmFixed1175E450g => "SUBCORE_VM_FIXED1175_E4_50G",
        SubcoreVmFixed1200E450g => "SUBCORE_VM_FIXED1200_E4_50G",
        SubcoreVmFixed1225E450g => "SUBCORE_VM_FIXED1225_E4_50G",
        SubcoreVmFixed1250E450g => "SUBCORE_VM_FIXED1250_E4_50G",
        SubcoreVmFixed1275E450g => "SUBCORE_VM_FIXED1275_E4_50G",
        SubcoreVmFixed1300E450g => "SUBCORE_VM_FIXED1300_E4_50G",
        SubcoreVmFixed1325E450g => "SUBCORE_VM_FIXED1325_E4_50G",
        SubcoreVmFixed1350E450g => "SUBCORE_VM_FIXED1350_E4_50G",
        SubcoreVmFixed1375E450g => "SUBCORE_VM_FIXED1375_E4_50G",
        SubcoreVmFixed1400E450g => "SUBCORE_VM_FIXED1400_E4_50G",
        SubcoreVmFixed1425E450g => "SUBCORE_VM_FIXED1425_E4_50G",
        SubcoreVmFixed1450E450g => "SUBCORE_VM_FIXED1450_E4_50G",
        SubcoreVmFixed1475E450g => "SUBCORE_VM_FIXED1475_E4_50G",
        SubcoreVmFixed1500E450g => "SUBCORE_VM_FIXED1500_E4_50G",
        SubcoreVmFixed1525E450g => "SUBCORE_VM_FIXED1525_E4_50G",
        SubcoreVmFixed1550E450g => "SUBCORE_VM_FIXED1550_E4_50G",
        SubcoreVmFixed1575E450g => "SUBCORE_VM_FIXED1575_E4_50G",
        SubcoreVmFixed1600E450g => "SUBCORE_VM_FIXED1600_E4_50G",
        SubcoreVmFixed1625E450g => "SUBCORE_VM_FIXED1625_E4_50G",
        SubcoreVmFixed1650E450g => "SUBCORE_VM_FIXED1650_E4_50G",
        SubcoreVmFixed1700E450g => "SUBCORE_VM_FIXED1700_E4_50G",
        SubcoreVmFixed1725E450g => "SUBCORE_VM_FIXED1725_E4_50G",
        SubcoreVmFixed1750E450g => "SUBCORE_VM_FIXED1750_E4_50G",
        SubcoreVmFixed1800E450g => "SUBCORE_VM_FIXED1800_E4_50G",
        SubcoreVmFixed1850E450g => "SUBCORE_VM_FIXED1850_E4_50G",
        SubcoreVmFixed1875E450g => "SUBCORE_VM_FIXED1875_E4_50G",
        SubcoreVmFixed1900E450g => "SUBCORE_VM_FIXED1900_E4_50G",
        SubcoreVmFixed1925E450g => "SUBCORE_VM_FIXED1925_E4_50G",
        SubcoreVmFixed1950E450g => "SUBCORE_VM_FIXED1950_E4_50G",
        SubcoreVmFixed2000E450g => "SUBCORE_VM_FIXED2000_E4_50G",
        SubcoreVmFixed2025E450g => "SUBCORE_VM_FIXED2025_E4_50G",
        SubcoreVmFixed2050E450g => "SUBCORE_VM_FIXED2050_E4_50G",
        SubcoreVmFixed2100E450g => "SUBCORE_VM_FIXED2100_E4_50G",
        SubcoreVmFixed2125E450g => "SUBCORE_VM_FIXED2125_E4_50G",
        SubcoreVmFixed2150E450g => "SUBCORE_VM_FIXED2150_E4_50G",
        SubcoreVmFixed2175E450g => "SUBCORE_VM_FIXED2175_E4_50G",
        SubcoreVmFixed2200E450g => "SUBCORE_VM_FIXED2200_E4_50G",
        SubcoreVmFixed2250E450g => "SUBCORE_VM_FIXED2250_E4_50G",
        SubcoreVmFixed2275E450g => "SUBCORE_VM_FIXED2275_E4_50G",
        SubcoreVmFixed2300E450g => "SUBCORE_VM_FIXED2300_E4_50G",
        SubcoreVmFixed2325E450g => "SUBCORE_VM_FIXED2325_E4_50G",
        SubcoreVmFixed2350E450g => "SUBCORE_VM_FIXED2350_E4_50G",
        SubcoreVmFixed2375E450g => "SUBCORE_VM_FIXED2375_E4_50G",
        SubcoreVmFixed2400E450g => "SUBCORE_VM_FIXED2400_E4_50G",
        SubcoreVmFixed2450E450g => "SUBCORE_VM_FIXED2450_E4_50G",
        SubcoreVmFixed2475E450g => "SUBCORE_VM_FIXED2475_E4_50G",
        SubcoreVmFixed2500E450g => "SUBCORE_VM_FIXED2500_E4_50G",
        SubcoreVmFixed2550E450g => "SUBCORE_VM_FIXED2550_E4_50G",
        SubcoreVmFixed2600E450g => "SUBCORE_VM_FIXED2600_E4_50G",
        SubcoreVmFixed2625E450g => "SUBCORE_VM_FIXED2625_E4_50G",
        SubcoreVmFixed2650E450g => "SUBCORE_VM_FIXED2650_E4_50G",
        SubcoreVmFixed2700E450g => "SUBCORE_VM_FIXED2700_E4_50G",
        SubcoreVmFixed2750E450g => "SUBCORE_VM_FIXED2750_E4_50G",
        SubcoreVmFixed2775E450g => "SUBCORE_VM_FIXED2775_E4_50G",
        SubcoreVmFixed2800E450g => "SUBCORE_VM_FIXED2800_E4_50G",
        SubcoreVmFixed2850E450g => "SUBCORE_VM_FIXED2850_E4_50G",
        SubcoreVmFixed2875E450g => "SUBCORE_VM_FIXED2875_E4_50G",
        SubcoreVmFixed2900E450g => "SUBCORE_VM_FIXED2900_E4_50G",
        SubcoreVmFixed2925E450g => "SUBCORE_VM_FIXED2925_E4_50G",
        SubcoreVmFixed2950E450g => "SUBCORE_VM_FIXED2950_E4_50G",
        SubcoreVmFixed2975E450g => "SUBCORE_VM_FIXED2975_E4_50G",
        SubcoreVmFixed3000E450g => "SUBCORE_VM_FIXED3000_E4_50G",
        SubcoreVmFixed3025E450g => "SUBCORE_VM_FIXED3025_E4_50G",
        SubcoreVmFixed3050E450g => "SUBCORE_VM_FIXED3050_E4_50G",
        SubcoreVmFixed3075E450g => "SUBCORE_VM_FIXED3075_E4_50G",
        SubcoreVmFixed3100E450g => "SUBCORE_VM_FIXED3100_E4_50G",
        SubcoreVmFixed3125E450g => "SUBCORE_VM_FIXED3125_E4_50G",
        SubcoreVmFixed3150E450g => "SUBCORE_VM_FIXED3150_E4_50G",
        SubcoreVmFixed3200E450g => "SUBCORE_VM_FIXED3200_E4_50G",
        SubcoreVmFixed3225E450g => "SUBCORE_VM_FIXED3225_E4_50G",
        SubcoreVmFixed3250E450g => "SUBCORE_VM_FIXED3250_E4_50G",
        SubcoreVmFixed3300E450g => "SUBCORE_VM_FIXED3300_E4_50G",
        SubcoreVmFixed3325E450g => "SUBCORE_VM_FIXED3325_E4_50G",
        SubcoreVmFixed3375E450g => "SUBCORE_VM_FIXED3375_E4_50G",
        SubcoreVmFixed3400E450g => "SUBCORE_VM_FIXED3400_E4_50G",
        SubcoreVmFixed3450E450g => "SUBCORE_VM_FIXED3450_E4_50G",
        SubcoreVmFixed3500E450g => "SUBCORE_VM_FIXED3500_E4_50G",
        SubcoreVmFixed3525E450g => "SUBCORE_VM_FIXED3525_E4_50G",
        SubcoreVmFixed3575E450g => "SUBCORE_VM_FIXED3575_E4_50G",
        SubcoreVmFixed3600E450g => "SUBCORE_VM_FIXED3600_E4_50G",
        SubcoreVmFixed3625E450g => "SUBCORE_VM_FIXED3625_E4_50G",
        SubcoreVmFixed3675E450g => "SUBCORE_VM_FIXED3675_E4_50G",
        SubcoreVmFixed3700E450g => "SUBCORE_VM_FIXED3700_E4_50G",
        SubcoreVmFixed3750E450g => "SUBCORE_VM_FIXED3750_E4_50G",
        SubcoreVmFixed3800E450g => "SUBCORE_VM_FIXED3800_E4_50G",
        SubcoreVmFixed3825E450g => "SUBCORE_VM_FIXED3825_E4_50G",
        SubcoreVmFixed3850E450g => "SUBCORE_VM_FIXED3850_E4_50G",
        SubcoreVmFixed3875E450g => "SUBCORE_VM_FIXED3875_E4_50G",
        SubcoreVmFixed3900E450g => "SUBCORE_VM_FIXED3900_E4_50G",
        SubcoreVmFixed3975E450g => "SUBCORE_VM_FIXED3975_E4_50G",
        SubcoreVmFixed4000E450g => "SUBCORE_VM_FIXED4000_E4_50G",
        SubcoreVmFixed4025E450g => "SUBCORE_VM_FIXED4025_E4_50G",
        SubcoreVmFixed4050E450g => "SUBCORE_VM_FIXED4050_E4_50G",
        SubcoreVmFixed4100E450g => "SUBCORE_VM_FIXED4100_E4_50G",
        SubcoreVmFixed4125E450g => "SUBCORE_VM_FIXED4125_E4_50G",
        SubcoreVmFixed4200E450g => "SUBCORE_VM_FIXED4200_E4_50G",
        SubcoreVmFixed4225E450g => "SUBCORE_VM_FIXED4225_E4_50G",
        SubcoreVmFixed4250E450g => "SUBCORE_VM_FIXED4250_E4_50G",
        SubcoreVmFixed4275E450g => "SUBCORE_VM_FIXED4275_E4_50G",
        SubcoreVmFixed4300E450g => "SUBCORE_VM_FIXED4300_E4_50G",
        SubcoreVmFixed4350E450g => "SUBCORE_VM_FIXED4350_E4_50G",
        SubcoreVmFixed4375E450g => "SUBCORE_VM_FIXED4375_E4_50G",
        SubcoreVmFixed4400E450g => "SUBCORE_VM_FIXED4400_E4_50G",
        SubcoreVmFixed4425E450g => "SUBCORE_VM_FIXED4425_E4_50G",
        SubcoreVmFixed4500E450g => "SUBCORE_VM_FIXED4500_E4_50G",
        SubcoreVmFixed4550E450g => "SUBCORE_VM_FIXED4550_E4_50G",
        SubcoreVmFixed4575E450g => "SUBCORE_VM_FIXED4575_E4_50G",
        SubcoreVmFixed4600E450g => "SUBCORE_VM_FIXED4600_E4_50G",
        SubcoreVmFixed4625E450g => "SUBCORE_VM_FIXED4625_E4_50G",
        SubcoreVmFixed4650E450g => "SUBCORE_VM_FIXED4650_E4_50G",
        SubcoreVmFixed4675E450g => "SUBCORE_VM_FIXED4675_E4_50G",
        SubcoreVmFixed4700E450g => "SUBCORE_VM_FIXED4700_E4_50G",
        SubcoreVmFixed4725E450g => "SUBCORE_VM_FIXED4725_E4_50G",
        SubcoreVmFixed4750E450g => "SUBCORE_VM_FIXED4750_E4_50G",
        SubcoreVmFixed4800E450g => "SUBCORE_VM_FIXED4800_E4_50G",
        SubcoreVmFixed4875E450g => "SUBCORE_VM_FIXED4875_E4_50G",
        SubcoreVmFixed4900E450g => "SUBCORE_VM_FIXED4900_E4_50G",
        SubcoreVmFixed4950E450g => "SUBCORE_VM_FIXED4950_E4_50G",
        SubcoreVmFixed5000E450g => "SUBCORE_VM_FIXED5000_E4_50G",
        SubcoreVmFixed0020A150g => "SUBCORE_VM_FIXED0020_A1_50G",
        SubcoreVmFixed0040A150g => "SUBCORE_VM_FIXED0040_A1_50G",
        SubcoreVmFixed0060A150g => "SUBCORE_VM_FIXED0060_A1_50G",
        SubcoreVmFixed0080A150g => "SUBCORE_VM_FIXED0080_A1_50G",
        SubcoreVmFixed0100A150g => "SUBCORE_VM_FIXED0100_A1_50G",
        SubcoreVmFixed0120A150g => "SUBCORE_VM_FIXED0120_A1_50G",
        SubcoreVmFixed0140A150g => "SUBCORE_VM_FIXED0140_A1_50G",
        SubcoreVmFixed0160A150g => "SUBCORE_VM_FIXED0160_A1_50G",
        SubcoreVmFixed0180A150g => "SUBCORE_VM_FIXED0180_A1_50G",
        SubcoreVmFixed0200A150g => "SUBCORE_VM_FIXED0200_A1_50G",
        SubcoreVmFixed0220A150g => "SUBCORE_VM_FIXED0220_A1_50G",
        SubcoreVmFixed0240A150g => "SUBCORE_VM_FIXED0240_A1_50G",
        SubcoreVmFixed0260A150g => "SUBCORE_VM_FIXED0260_A1_50G",
        SubcoreVmFixed0280A150g => "SUBCORE_VM_FIXED0280_A1_50G",
        SubcoreVmFixed0300A150g => "SUBCORE_VM_FIXED0300_A1_50G",
        SubcoreVmFixed0320A150g => "SUBCORE_VM_FIXED0320_A1_50G",
        SubcoreVmFixed0340A150g => "SUBCORE_VM_FIXED0340_A1_50G",
        SubcoreVmFixed0360A150g => "SUBCORE_VM_FIXED0360_A1_50G",
        SubcoreVmFixed0380A150g => "SUBCORE_VM_FIXED0380_A1_50G",
        SubcoreVmFixed0400A150g => "SUBCORE_VM_FIXED0400_A1_50G",
        SubcoreVmFixed0420A150g => "SUBCORE_VM_FIXED0420_A1_50G",
        SubcoreVmFixed0440A150g => "SUBCORE_VM_FIXED0440_A1_50G",
        SubcoreVmFixed0460A150g => "SUBCORE_VM_FIXED0460_A1_50G",
        SubcoreVmFixed0480A150g => "SUBCORE_VM_FIXED0480_A1_50G",
        SubcoreVmFixed0500A150g => "SUBCORE_VM_FIXED0500_A1_50G",
        SubcoreVmFixed0520A150g => "SUBCORE_VM_FIXED0520_A1_50G",
        SubcoreVmFixed0540A150g => "SUBCORE_VM_FIXED0540_A1_50G",
        SubcoreVmFixed0560A150g => "SUBCORE_VM_FIXED0560_A1_50G",
        SubcoreVmFixed0580A150g => "SUBCORE_VM_FIXED0580_A1_50G",
        SubcoreVmFixed0600A150g => "SUBCORE_VM_FIXED0600_A1_50G",
        SubcoreVmFixed0620A150g => "SUBCORE_VM_FIXED0620_A1_50G",
        SubcoreVmFixed0640A150g => "SUBCORE_VM_FIXED0640_A1_50G",
        SubcoreVmFixed0660A150g => "SUBCORE_VM_FIXED0660_A1_50G",
        SubcoreVmFixed0680A150g => "SUBCORE_VM_FIXED0680_A1_50G",
        SubcoreVmFixed0700A150g => "SUBCORE_VM_FIXED0700_A1_50G",
        SubcoreVmFixed0720A150g => "SUBCORE_VM_FIXED0720_A1_50G",
        SubcoreVmFixed0740A150g => "SUBCORE_VM_FIXED0740_A1_50G",
        SubcoreVmFixed0760A150g => "SUBCORE_VM_FIXED0760_A1_50G",
        SubcoreVmFixed0780A150g => "SUBCORE_VM_FIXED0780_A1_50G",
        SubcoreVmFixed0800A150g => "SUBCORE_VM_FIXED0800_A1_50G",
        SubcoreVmFixed0820A150g => "SUBCORE_VM_FIXED0820_A1_50G",
        SubcoreVmFixed0840A150g => "SUBCORE_VM_FIXED0840_A1_50G",
        SubcoreVmFixed0860A150g => "SUBCORE_VM_FIXED0860_A1_50G",
        SubcoreVmFixed0880A150g => "SUBCORE_VM_FIXED0880_A1_50G",
        SubcoreVmFixed0900A150g => "SUBCORE_VM_FIXED0900_A1_50G",
        SubcoreVmFixed0920A150g => "SUBCORE_VM_FIXED0920_A1_50G",
        SubcoreVmFixed0940A150g => "SUBCORE_VM_FIXED0940_A1_50G",
        SubcoreVmFixed0960A150g => "SUBCORE_VM_FIXED0960_A1_50G",
        SubcoreVmFixed0980A150g => "SUBCORE_VM_FIXED0980_A1_50G",
        SubcoreVmFixed1000A150g => "SUBCORE_VM_FIXED1000_A1_50G",
        SubcoreVmFixed1020A150g => "SUBCORE_VM_FIXED1020_A1_50G",
        SubcoreVmFixed1040A150g => "SUBCORE_VM_FIXED1040_A1_50G",
        SubcoreVmFixed1060A150g => "SUBCORE_VM_FIXED1060_A1_50G",
        SubcoreVmFixed1080A150g => "SUBCORE_VM_FIXED1080_A1_50G",
        SubcoreVmFixed1100A150g => "SUBCORE_VM_FIXED1100_A1_50G",
        SubcoreVmFixed1120A150g => "SUBCORE_VM_FIXED1120_A1_50G",
        SubcoreVmFixed1140A150g => "SUBCORE_VM_FIXED1140_A1_50G",
        SubcoreVmFixed1160A150g => "SUBCORE_VM_FIXED1160_A1_50G",
        SubcoreVmFixed1180A150g => "SUBCORE_VM_FIXED1180_A1_50G",
        SubcoreVmFixed1200A150g => "SUBCORE_VM_FIXED1200_A1_50G",
        SubcoreVmFixed1220A150g => "SUBCORE_VM_FIXED1220_A1_50G",
        SubcoreVmFixed1240A150g => "SUBCORE_VM_FIXED1240_A1_50G",
        SubcoreVmFixed1260A150g => "SUBCORE_VM_FIXED1260_A1_50G",
        SubcoreVmFixed1280A150g => "SUBCORE_VM_FIXED1280_A1_50G",
        SubcoreVmFixed1300A150g => "SUBCORE_VM_FIXED1300_A1_50G",
        SubcoreVmFixed1320A150g => "SUBCORE_VM_FIXED1320_A1_50G",
        SubcoreVmFixed1340A150g => "SUBCORE_VM_FIXED1340_A1_50G",
        SubcoreVmFixed1360A150g => "SUBCORE_VM_FIXED1360_A1_50G",
        SubcoreVmFixed1380A150g => "SUBCORE_VM_FIXED1380_A1_50G",
        SubcoreVmFixed1400A150g => "SUBCORE_VM_FIXED1400_A1_50G",
        SubcoreVmFixed1420A150g => "SUBCORE_VM_FIXED1420_A1_50G",
        SubcoreVmFixed1440A150g => "SUBCORE_VM_FIXED1440_A1_50G",
        SubcoreVmFixed1460A150g => "SUBCORE_VM_FIXED1460_A1_50G",
        SubcoreVmFixed1480A150g => "SUBCORE_VM_FIXED1480_A1_50G",
        SubcoreVmFixed1500A150g => "SUBCORE_VM_FIXED1500_A1_50G",
        SubcoreVmFixed1520A150g => "SUBCORE_VM_FIXED1520_A1_50G",
        SubcoreVmFixed1540A150g => "SUBCORE_VM_FIXED1540_A1_50G",
        SubcoreVmFixed1560A150g => "SUBCORE_VM_FIXED1560_A1_50G",
        SubcoreVmFixed1580A150g => "SUBCORE_VM_FIXED1580_A1_50G",
        SubcoreVmFixed1600A150g => "SUBCORE_VM_FIXED1600_A1_50G",
        SubcoreVmFixed1620A150g => "SUBCORE_VM_FIXED1620_A1_50G",
        SubcoreVmFixed1640A150g => "SUBCORE_VM_FIXED1640_A1_50G",
        SubcoreVmFixed1660A150g => "SUBCORE_VM_FIXED1660_A1_50G",
        SubcoreVmFixed1680A150g => "SUBCORE_VM_FIXED1680_A1_50G",
        SubcoreVmFixed1700A150g => "SUBCORE_VM_FIXED1700_A1_50G",
        SubcoreVmFixed1720A150g => "SUBCORE_VM_FIXED1720_A1_50G",
        SubcoreVmFixed1740A150g => "SUBCORE_VM_FIXED1740_A1_50G",
        SubcoreVmFixed1760A150g => "SUBCORE_VM_FIXED1760_A1_50G",
        SubcoreVmFixed1780A150g => "SUBCORE_VM_FIXED1780_A1_50G",
        SubcoreVmFixed1800A150g => "SUBCORE_VM_FIXED1800_A1_50G",
        SubcoreVmFixed1820A150g => "SUBCORE_VM_FIXED1820_A1_50G",
        SubcoreVmFixed1840A150g => "SUBCORE_VM_FIXED1840_A1_50G",
        SubcoreVmFixed1860A150g => "SUBCORE_VM_FIXED1860_A1_50G",
        SubcoreVmFixed1880A150g => "SUBCORE_VM_FIXED1880_A1_50G",
        SubcoreVmFixed1900A150g => "SUBCORE_VM_FIXED1900_A1_50G",
        SubcoreVmFixed1920A150g => "SUBCORE_VM_FIXED1920_A1_50G",
        SubcoreVmFixed1940A150g => "SUBCORE_VM_FIXED1940_A1_50G",
        SubcoreVmFixed1960A150g => "SUBCORE_VM_FIXED1960_A1_50G",
        SubcoreVmFixed1980A150g => "SUBCORE_VM_FIXED1980_A1_50G",
        SubcoreVmFixed2000A150g => "SUBCORE_VM_FIXED2000_A1_50G",
        SubcoreVmFixed2020A150g => "SUBCORE_VM_FIXED2020_A1_50G",
        SubcoreVmFixed2040A150g => "SUBCORE_VM_FIXED2040_A1_50G",
        SubcoreVmFixed2060A150g => "SUBCORE_VM_FIXED2060_A1_50G",
        SubcoreVmFixed2080A150g => "SUBCORE_VM_FIXED2080_A1_50G",
        SubcoreVmFixed2100A150g => "SUBCORE_VM_FIXED2100_A1_50G",
        SubcoreVmFixed2120A150g => "SUBCORE_VM_FIXED2120_A1_50G",
        SubcoreVmFixed2140A150g => "SUBCORE_VM_FIXED2140_A1_50G",
        SubcoreVmFixed2160A150g => "SUBCORE_VM_FIXED2160_A1_50G",
        SubcoreVmFixed2180A150g => "SUBCORE_VM_FIXED2180_A1_50G",
        SubcoreVmFixed2200A150g => "SUBCORE_VM_FIXED2200_A1_50G",
        SubcoreVmFixed2220A150g => "SUBCORE_VM_FIXED2220_A1_50G",
        SubcoreVmFixed2240A150g => "SUBCORE_VM_FIXED2240_A1_50G",
        SubcoreVmFixed2260A150g => "SUBCORE_VM_FIXED2260_A1_50G",
        SubcoreVmFixed2280A150g => "SUBCORE_VM_FIXED2280_A1_50G",
        SubcoreVmFixed2300A150g => "SUBCORE_VM_FIXED2300_A1_50G",
        SubcoreVmFixed2320A150g => "SUBCORE_VM_FIXED2320_A1_50G",
        SubcoreVmFixed2340A150g => "SUBCORE_VM_FIXED2340_A1_50G",
        SubcoreVmFixed2360A150g => "SUBCORE_VM_FIXED2360_A1_50G",
        SubcoreVmFixed2380A150g => "SUBCORE_VM_FIXED2380_A1_50G",
        SubcoreVmFixed2400A150g => "SUBCORE_VM_FIXED2400_A1_50G",
        SubcoreVmFixed2420A150g => "SUBCORE_VM_FIXED2420_A1_50G",
        SubcoreVmFixed2440A150g => "SUBCORE_VM_FIXED2440_A1_50G",
        SubcoreVmFixed2460A150g => "SUBCORE_VM_FIXED2460_A1_50G",
        SubcoreVmFixed2480A150g => "SUBCORE_VM_FIXED2480_A1_50G",
        SubcoreVmFixed2500A150g => "SUBCORE_VM_FIXED2500_A1_50G",
        SubcoreVmFixed2520A150g => "SUBCORE_VM_FIXED2520_A1_50G",
        SubcoreVmFixed2540A150g => "SUBCORE_VM_FIXED2540_A1_50G",
        SubcoreVmFixed2560A150g => "SUBCORE_VM_FIXED2560_A1_50G",
        SubcoreVmFixed2580A150g => "SUBCORE_VM_FIXED2580_A1_50G",
        SubcoreVmFixed2600A150g => "SUBCORE_VM_FIXED2600_A1_50G",
        SubcoreVmFixed2620A150g => "SUBCORE_VM_FIXED2620_A1_50G",
        SubcoreVmFixed2640A150g => "SUBCORE_VM_FIXED2640_A1_50G",
        SubcoreVmFixed2660A150g => "SUBCORE_VM_FIXED2660_A1_50G",
        SubcoreVmFixed2680A150g => "SUBCORE_VM_FIXED2680_A1_50G",
        SubcoreVmFixed2700A150g => "SUBCORE_VM_FIXED2700_A1_50G",
        SubcoreVmFixed2720A150g => "SUBCORE_VM_FIXED2720_A1_50G",
        SubcoreVmFixed2740A150g => "SUBCORE_VM_FIXED2740_A1_50G",
        SubcoreVmFixed2760A150g => "SUBCORE_VM_FIXED2760_A1_50G",
        SubcoreVmFixed2780A150g => "SUBCORE_VM_FIXED2780_A1_50G",
        SubcoreVmFixed2800A150g => "SUBCORE_VM_FIXED2800_A1_50G",
        SubcoreVmFixed2820A150g => "SUBCORE_VM_FIXED2820_A1_50G",
        SubcoreVmFixed2840A150g => "SUBCORE_VM_FIXED2840_A1_50G",
        SubcoreVmFixed2860A150g => "SUBCORE_VM_FIXED2860_A1_50G",
        SubcoreVmFixed2880A150g => "SUBCORE_VM_FIXED2880_A1_50G",
        SubcoreVmFixed2900A150g => "SUBCORE_VM_FIXED2900_A1_50G",
        SubcoreVmFixed2920A150g => "SUBCORE_VM_FIXED2920_A1_50G",
        SubcoreVmFixed2940A150g => "SUBCORE_VM_FIXED2940_A1_50G",
        SubcoreVmFixed2960A150g => "SUBCORE_VM_FIXED2960_A1_50G",
        SubcoreVmFixed2980A150g => "SUBCORE_VM_FIXED2980_A1_50G",
        SubcoreVmFixed3000A150g => "SUBCORE_VM_FIXED3000_A1_50G",
        SubcoreVmFixed3020A150g => "SUBCORE_VM_FIXED3020_A1_50G",
        SubcoreVmFixed3040A150g => "SUBCORE_VM_FIXED3040_A1_50G",
        SubcoreVmFixed3060A150g => "SUBCORE_VM_FIXED3060_A1_50G",
        SubcoreVmFixed3080A150g => "SUBCORE_VM_FIXED3080_A1_50G",
        SubcoreVmFixed3100A150g => "SUBCORE_VM_FIXED3100_A1_50G",
        SubcoreVmFixed3120A150g => "SUBCORE_VM_FIXED3120_A1_50G",
        SubcoreVmFixed3140A150g => "SUBCORE_VM_FIXED3140_A1_50G",
        SubcoreVmFixed3160A150g => "SUBCORE_VM_FIXED3160_A1_50G",
        SubcoreVmFixed3180A150g => "SUBCORE_VM_FIXED3180_A1_50G",
        SubcoreVmFixed3200A150g => "SUBCORE_VM_FIXED3200_A1_50G",
        SubcoreVmFixed3220A150g => "SUBCORE_VM_FIXED3220_A1_50G",
        SubcoreVmFixed3240A150g => "SUBCORE_VM_FIXED3240_A1_50G",
        SubcoreVmFixed3260A150g => "SUBCORE_VM_FIXED3260_A1_50G",
        SubcoreVmFixed3280A150g => "SUBCORE_VM_FIXED3280_A1_50G",
        SubcoreVmFixed3300A150g => "SUBCORE_VM_FIXED3300_A1_50G",
        SubcoreVmFixed3320A150g => "SUBCORE_VM_FIXED3320_A1_50G",
        SubcoreVmFixed3340A150g => "SUBCORE_VM_FIXED3340_A1_50G",
        SubcoreVmFixed3360A150g => "SUBCORE_VM_FIXED3360_A1_50G",
        SubcoreVmFixed3380A150g => "SUBCORE_VM_FIXED3380_A1_50G",
        SubcoreVmFixed3400A150g => "SUBCORE_VM_FIXED3400_A1_50G",
        SubcoreVmFixed3420A150g => "SUBCORE_VM_FIXED3420_A1_50G",
        SubcoreVmFixed3440A150g => "SUBCORE_VM_FIXED3440_A1_50G",
        SubcoreVmFixed3460A150g => "SUBCORE_VM_FIXED3460_A1_50G",
        SubcoreVmFixed3480A150g => "SUBCORE_VM_FIXED3480_A1_50G",
        SubcoreVmFixed3500A150g => "SUBCORE_VM_FIXED3500_A1_50G",
        SubcoreVmFixed3520A150g => "SUBCORE_VM_FIXED3520_A1_50G",
        SubcoreVmFixed3540A150g => "SUBCORE_VM_FIXED3540_A1_50G",
        SubcoreVmFixed3560A150g => "SUBCORE_VM_FIXED3560_A1_50G",
        SubcoreVmFixed3580A150g => "SUBCORE_VM_FIXED3580_A1_50G",
        SubcoreVmFixed3600A150g => "SUBCORE_VM_FIXED3600_A1_50G",
        SubcoreVmFixed3620A150g => "SUBCORE_VM_FIXED3620_A1_50G",
        SubcoreVmFixed3640A150g => "SUBCORE_VM_FIXED3640_A1_50G",
        SubcoreVmFixed3660A150g => "SUBCORE_VM_FIXED3660_A1_50G",
        SubcoreVmFixed3680A150g => "SUBCORE_VM_FIXED3680_A1_50G",
        SubcoreVmFixed3700A150g => "SUBCORE_VM_FIXED3700_A1_50G",
        SubcoreVmFixed3720A150g => "SUBCORE_VM_FIXED3720_A1_50G",
        SubcoreVmFixed3740A150g => "SUBCORE_VM_FIXED3740_A1_50G",
        SubcoreVmFixed3760A150g => "SUBCORE_VM_FIXED3760_A1_50G",
        SubcoreVmFixed3780A150g => "SUBCORE_VM_FIXED3780_A1_50G",
        SubcoreVmFixed3800A150g => "SUBCORE_VM_FIXED3800_A1_50G",
        SubcoreVmFixed3820A150g => "SUBCORE_VM_FIXED3820_A1_50G",
        SubcoreVmFixed3840A150g => "SUBCORE_VM_FIXED3840_A1_50G",
        SubcoreVmFixed3860A150g => "SUBCORE_VM_FIXED3860_A1_50G",
        SubcoreVmFixed3880A150g => "SUBCORE_VM_FIXED3880_A1_50G",
        SubcoreVmFixed3900A150g => "SUBCORE_VM_FIXED3900_A1_50G",
        SubcoreVmFixed3920A150g => "SUBCORE_VM_FIXED3920_A1_50G",
        SubcoreVmFixed3940A150g => "SUBCORE_VM_FIXED3940_A1_50G",
        SubcoreVmFixed3960A150g => "SUBCORE_VM_FIXED3960_A1_50G",
        SubcoreVmFixed3980A150g => "SUBCORE_VM_FIXED3980_A1_50G",
        SubcoreVmFixed4000A150g => "SUBCORE_VM_FIXED4000_A1_50G",
        SubcoreVmFixed4020A150g => "SUBCORE_VM_FIXED4020_A1_50G",
        SubcoreVmFixed4040A150g => "SUBCORE_VM_FIXED4040_A1_50G",
        SubcoreVmFixed4060A150g => "SUBCORE_VM_FIXED4060_A1_50G",
        SubcoreVmFixed4080A150g => "SUBCORE_VM_FIXED4080_A1_50G",
        SubcoreVmFixed4100A150g => "SUBCORE_VM_FIXED4100_A1_50G",
        SubcoreVmFixed4120A150g => "SUBCORE_VM_FIXED4120_A1_50G",
        SubcoreVmFixed4140A150g => "SUBCORE_VM_FIXED4140_A1_50G",
        SubcoreVmFixed4160A150g => "SUBCORE_VM_FIXED4160_A1_50G",
        SubcoreVmFixed4180A150g => "SUBCORE_VM_FIXED4180_A1_50G",
        SubcoreVmFixed4200A150g => "SUBCORE_VM_FIXED4200_A1_50G",
        SubcoreVmFixed4220A150g => "SUBCORE_VM_FIXED4220_A1_50G",
        SubcoreVmFixed4240A150g => "SUBCORE_VM_FIXED4240_A1_50G",
        SubcoreVmFixed4260A150g => "SUBCORE_VM_FIXED4260_A1_50G",
        SubcoreVmFixed4280A150g => "SUBCORE_VM_FIXED4280_A1_50G",
        SubcoreVmFixed4300A150g => "SUBCORE_VM_FIXED4300_A1_50G",
        SubcoreVmFixed4320A150g => "SUBCORE_VM_FIXED4320_A1_50G",
        SubcoreVmFixed4340A150g => "SUBCORE_VM_FIXED4340_A1_50G",
        SubcoreVmFixed4360A150g => "SUBCORE_VM_FIXED4360_A1_50G",
        SubcoreVmFixed4380A150g => "SUBCORE_VM_FIXED4380_A1_50G",
        SubcoreVmFixed4400A150g => "SUBCORE_VM_FIXED4400_A1_50G",
        SubcoreVmFixed4420A150g => "SUBCORE_VM_FIXED4420_A1_50G",
        SubcoreVmFixed4440A150g => "SUBCORE_VM_FIXED4440_A1_50G",
        SubcoreVmFixed4460A150g => "SUBCORE_VM_FIXED4460_A1_50G",
        SubcoreVmFixed4480A150g => "SUBCORE_VM_FIXED4480_A1_50G",
        SubcoreVmFixed4500A150g => "SUBCORE_VM_FIXED4500_A1_50G",
        SubcoreVmFixed4520A150g => "SUBCORE_VM_FIXED4520_A1_50G",
        SubcoreVmFixed4540A150g => "SUBCORE_VM_FIXED4540_A1_50G",
        SubcoreVmFixed4560A150g => "SUBCORE_VM_FIXED4560_A1_50G",
        SubcoreVmFixed4580A150g => "SUBCORE_VM_FIXED4580_A1_50G",
        SubcoreVmFixed4600A150g => "SUBCORE_VM_FIXED4600_A1_50G",
        SubcoreVmFixed4620A150g => "SUBCORE_VM_FIXED4620_A1_50G",
        SubcoreVmFixed4640A150g => "SUBCORE_VM_FIXED4640_A1_50G",
        SubcoreVmFixed4660A150g => "SUBCORE_VM_FIXED4660_A1_50G",
        SubcoreVmFixed4680A150g => "SUBCORE_VM_FIXED4680_A1_50G",
        SubcoreVmFixed4700A150g => "SUBCORE_VM_FIXED4700_A1_50G",
        SubcoreVmFixed4720A150g => "SUBCORE_VM_FIXED4720_A1_50G",
        SubcoreVmFixed4740A150g => "SUBCORE_VM_FIXED4740_A1_50G",
        SubcoreVmFixed4760A150g => "SUBCORE_VM_FIXED4760_A1_50G",
        SubcoreVmFixed4780A150g => "SUBCORE_VM_FIXED4780_A1_50G",
        SubcoreVmFixed4800A150g => "SUBCORE_VM_FIXED4800_A1_50G",
        SubcoreVmFixed4820A150g => "SUBCORE_VM_FIXED4820_A1_50G",
        SubcoreVmFixed4840A150g => "SUBCORE_VM_FIXED4840_A1_50G",
        SubcoreVmFixed4860A150g => "SUBCORE_VM_FIXED4860_A1_50G",
        SubcoreVmFixed4880A150g => "SUBCORE_VM_FIXED4880_A1_50G",
        SubcoreVmFixed4900A150g => "SUBCORE_VM_FIXED4900_A1_50G",
        SubcoreVmFixed4920A150g => "SUBCORE_VM_FIXED4920_A1_50G",
        SubcoreVmFixed4940A150g => "SUBCORE_VM_FIXED4940_A1_50G",
        SubcoreVmFixed4960A150g => "SUBCORE_VM_FIXED4960_A1_50G",
        SubcoreVmFixed4980A150g => "SUBCORE_VM_FIXED4980_A1_50G",
        SubcoreVmFixed5000A150g => "SUBCORE_VM_FIXED5000_A1_50G",
        SubcoreVmFixed0090X950g => "SUBCORE_VM_FIXED0090_X9_50G",
        SubcoreVmFixed0180X950g => "SUBCORE_VM_FIXED0180_X9_50G",
        SubcoreVmFixed0270X950g => "SUBCORE_VM_FIXED0270_X9_50G",
        SubcoreVmFixed0360X950g => "SUBCORE_VM_FIXED0360_X9_50G",
        SubcoreVmFixed0450X950g => "SUBCORE_VM_FIXED0450_X9_50G",
        SubcoreVmFixed0540X950g => "SUBCORE_VM_FIXED0540_X9_50G",
        SubcoreVmFixed0630X950g => "SUBCORE_VM_FIXED0630_X9_50G",
        SubcoreVmFixed0720X950g => "SUBCORE_VM_FIXED0720_X9_50G",
        SubcoreVmFixed0810X950g => "SUBCORE_VM_FIXED0810_X9_50G",
        SubcoreVmFixed0900X950g => "SUBCORE_VM_FIXED0900_X9_50G",
        SubcoreVmFixed0990X950g => "SUBCORE_VM_FIXED0990_X9_50G",
        SubcoreVmFixed1080X950g => "SUBCORE_VM_FIXED1080_X9_50G",
        SubcoreVmFixed1170X950g => "SUBCORE_VM_FIXED1170_X9_50G",
        SubcoreVmFixed1260X950g => "SUBCORE_VM_FIXED1260_X9_50G",
        SubcoreVmFixed1350X950g => "SUBCORE_VM_FIXED1350_X9_50G",
        SubcoreVmFixed1440X950g => "SUBCORE_VM_FIXED1440_X9_50G",
        SubcoreVmFixed1530X950g => "SUBCORE_VM_FIXED1530_X9_50G",
        SubcoreVmFixed1620X950g => "SUBCORE_VM_FIXED1620_X9_50G",
        SubcoreVmFixed1710X950g => "SUBCORE_VM_FIXED1710_X9_50G",
        SubcoreVmFixed1800X950g => "SUBCORE_VM_FIXED1800_X9_50G",
        SubcoreVmFixed1890X950g => "SUBCORE_VM_FIXED1890_X9_50G",
        SubcoreVmFixed1980X950g => "SUBCORE_VM_FIXED1980_X9_50G",
        SubcoreVmFixed2070X950g => "SUBCORE_VM_FIXED2070_X9_50G",
        SubcoreVmFixed2160X950g => "SUBCORE_VM_FIXED2160_X9_50G",
        SubcoreVmFixed2250X950g => "SUBCORE_VM_FIXED2250_X9_50G",
        SubcoreVmFixed2340X950g => "SUBCORE_VM_FIXED2340_X9_50G",
        SubcoreVmFixed2430X950g => "SUBCORE_VM_FIXED2430_X9_50G",
        SubcoreVmFixed2520X950g => "SUBCORE_VM_FIXED2520_X9_50G",
        SubcoreVmFixed2610X950g => "SUBCORE_VM_FIXED2610_X9_50G",
        SubcoreVmFixed2700X950g => "SUBCORE_VM_FIXED2700_X9_50G",
        SubcoreVmFixed2790X950g => "SUBCORE_VM_FIXED2790_X9_50G",
        SubcoreVmFixed2880X950g => "SUBCORE_VM_FIXED2880_X9_50G",
        SubcoreVmFixed2970X950g => "SUBCORE_VM_FIXED2970_X9_50G",
        SubcoreVmFixed3060X950g => "SUBCORE_VM_FIXED3060_X9_50G",
        SubcoreVmFixed3150X950g => "SUBCORE_VM_FIXED3150_X9_50G",
        SubcoreVmFixed3240X950g => "SUBCORE_VM_FIXED3240_X9_50G",
        SubcoreVmFixed3330X950g => "SUBCORE_VM_FIXED3330_X9_50G",
        SubcoreVmFixed3420X950g => "SUBCORE_VM_FIXED3420_X9_50G",
        SubcoreVmFixed3510X950g => "SUBCORE_VM_FIXED3510_X9_50G",
        SubcoreVmFixed3600X950g => "SUBCORE_VM_FIXED3600_X9_50G",
        SubcoreVmFixed3690X950g => "SUBCORE_VM_FIXED3690_X9_50G",
        SubcoreVmFixed3780X950g => "SUBCORE_VM_FIXED3780_X9_50G",
        SubcoreVmFixed3870X950g => "SUBCORE_VM_FIXED3870_X9_50G",
        SubcoreVmFixed3960X950g => "SUBCORE_VM_FIXED3960_X9_50G",
        SubcoreVmFixed4050X950g => "SUBCORE_VM_FIXED4050_X9_50G",
        SubcoreVmFixed4140X950g => "SUBCORE_VM_FIXED4140_X9_50G",
        SubcoreVmFixed4230X950g => "SUBCORE_VM_FIXED4230_X9_50G",
        SubcoreVmFixed4320X950g => "SUBCORE_VM_FIXED4320_X9_50G",
        SubcoreVmFixed4410X950g => "SUBCORE_VM_FIXED4410_X9_50G",
        SubcoreVmFixed4500X950g => "SUBCORE_VM_FIXED4500_X9_50G",
        SubcoreVmFixed4590X950g => "SUBCORE_VM_FIXED4590_X9_50G",
        SubcoreVmFixed4680X950g => "SUBCORE_VM_FIXED4680_X9_50G",
        SubcoreVmFixed4770X950g => "SUBCORE_VM_FIXED4770_X9_50G",
        SubcoreVmFixed4860X950g => "SUBCORE_VM_FIXED4860_X9_50G",
        SubcoreVmFixed4950X950g => "SUBCORE_VM_FIXED4950_X9_50G",
        DynamicA150g => "DYNAMIC_A1_50G",
        Fixed0040A150g => "FIXED0040_A1_50G",
        Fixed0100A150g => "FIXED0100_A1_50G",
        Fixed0200A150g => "FIXED0200_A1_50G",
        Fixed0300A150g => "FIXED0300_A1_50G",
        Fixed0400A150g => "FIXED0400_A1_50G",
        Fixed0500A150g => "FIXED0500_A1_50G",
        Fixed0600A150g => "FIXED0600_A1_50G",
        Fixed0700A150g => "FIXED0700_A1_50G",
        Fixed0800A150g => "FIXED0800_A1_50G",
        Fixed0900A150g => "FIXED0900_A1_50G",
        Fixed1000A150g => "FIXED1000_A1_50G",
        Fixed1100A150g => "FIXED1100_A1_50G",
        Fixed1200A150g => "FIXED1200_A1_50G",
        Fixed1300A150g => "FIXED1300_A1_50G",
        Fixed1400A150g => "FIXED1400_A1_50G",
        Fixed1500A150g => "FIXED1500_A1_50G",
        Fixed1600A150g => "FIXED1600_A1_50G",
        Fixed1700A150g => "FIXED1700_A1_50G",
        Fixed1800A150g => "FIXED1800_A1_50G",
        Fixed1900A150g => "FIXED1900_A1_50G",
        Fixed2000A150g => "FIXED2000_A1_50G",
        Fixed2100A150g => "FIXED2100_A1_50G",
        Fixed2200A150g => "FIXED2200_A1_50G",
        Fixed2300A150g => "FIXED2300_A1_50G",
        Fixed2400A150g => "FIXED2400_A1_50G",
        Fixed2500A150g => "FIXED2500_A1_50G",
        Fixed2600A150g => "FIXED2600_A1_50G",
        Fixed2700A150g => "FIXED2700_A1_50G",
        Fixed2800A150g => "FIXED2800_A1_50G",
        Fixed2900A150g => "FIXED2900_A1_50G",
        Fixed3000A150g => "FIXED3000_A1_50G",
        Fixed3100A150g => "FIXED3100_A1_50G",
        Fixed3200A150g => "FIXED3200_A1_50G",
        Fixed3300A150g => "FIXED3300_A1_50G",
        Fixed3400A150g => "FIXED3400_A1_50G",
        Fixed3500A150g => "FIXED3500_A1_50G",
        Fixed3600A150g => "FIXED3600_A1_50G",
        Fixed3700A150g => "FIXED3700_A1_50G",
        Fixed3800A150g => "FIXED3800_A1_50G",
        Fixed3900A150g => "FIXED3900_A1_50G",
        Fixed4000A150g => "FIXED4000_A1_50G",
        EntirehostA150g => "ENTIREHOST_A1_50G",
        DynamicX950g => "DYNAMIC_X9_50G",
        Fixed0040X950g => "FIXED0040_X9_50G",
        Fixed0400X950g => "FIXED0400_X9_50G",
        Fixed0800X950g => "FIXED0800_X9_50G",
        Fixed1200X950g => "FIXED1200_X9_50G",
        Fixed1600X950g => "FIXED1600_X9_50G",
        Fixed2000X950g => "FIXED2000_X9_50G",
        Fixed2400X950g => "FIXED2400_X9_50G",
        Fixed2800X950g => "FIXED2800_X9_50G",
        Fixed3200X950g => "FIXED3200_X9_50G",
        Fixed3600X950g => "FIXED3600_X9_50G",
        Fixed4000X950g => "FIXED4000_X9_50G",
        StandardVmFixed0100X950g => "STANDARD_VM_FIXED0100_X9_50G",
        StandardVmFixed0200X950g => "STANDARD_VM_FIXED0200_X9_50G",
        StandardVmFixed0300X950g => "STANDARD_VM_FIXED0300_X9_50G",
        StandardVmFixed0400X950g => "STANDARD_VM_FIXED0400_X9_50G",
        StandardVmFixed0500X950g => "STANDARD_VM_FIXED0500_X9_50G",
        StandardVmFixed0600X950g => "STANDARD_VM_FIXED0600_X9_50G",
        StandardVmFixed0700X950g => "STANDARD_VM_FIXED0700_X9_50G",
        StandardVmFixed0800X950g => "STANDARD_VM_FIXED0800_X9_50G",
        StandardVmFixed0900X950g => "STANDARD_VM_FIXED0900_X9_50G",
        StandardVmFixed1000X950g => "STANDARD_VM_FIXED1000_X9_50G",
        StandardVmFixed1100X950g => "STANDARD_VM_FIXED1100_X9_50G",
        StandardVmFixed1200X950g => "STANDARD_VM_FIXED1200_X9_50G",
        StandardVmFixed1300X950g => "STANDARD_VM_FIXED1300_X9_50G",
        StandardVmFixed1400X950g => "STANDARD_VM_FIXED1400_X9_50G",
        StandardVmFixed1500X950g => "STANDARD_VM_FIXED1500_X9_50G",
        StandardVmFixed1600X950g => "STANDARD_VM_FIXED1600_X9_50G",
        StandardVmFixed1700X950g => "STANDARD_VM_FIXED1700_X9_50G",
        StandardVmFixed1800X950g => "STANDARD_VM_FIXED1800_X9_50G",
        StandardVmFixed1900X950g => "STANDARD_VM_FIXED1900_X9_50G",
        StandardVmFixed2000X950g => "STANDARD_VM_FIXED2000_X9_50G",
        StandardVmFixed2100X950g => "STANDARD_VM_FIXED2100_X9_50G",
        StandardVmFixed2200X950g => "STANDARD_VM_FIXED2200_X9_50G",
        StandardVmFixed2300X950g => "STANDARD_VM_FIXED2300_X9_50G",
        StandardVmFixed2400X950g => "STANDARD_VM_FIXED2400_X9_50G",
        StandardVmFixed2500X950g => "STANDARD_VM_FIXED2500_X9_50G",
        StandardVmFixed2600X950g => "STANDARD_VM_FIXED2600_X9_50G",
        StandardVmFixed2700X950g => "STANDARD_VM_FIXED2700_X9_50G",
        StandardVmFixed2800X950g => "STANDARD_VM_FIXED2800_X9_50G",
        StandardVmFixed2900X950g => "STANDARD_VM_FIXED2900_X9_50G",
        StandardVmFixed3000X950g => "STANDARD_VM_FIXED3000_X9_50G",
        StandardVmFixed3100X950g => "STANDARD_VM_FIXED3100_X9_50G",
        StandardVmFixed3200X950g => "STANDARD_VM_FIXED3200_X9_50G",
        StandardVmFixed3300X950g => "STANDARD_VM_FIXED3300_X9_50G",
        StandardVmFixed3400X950g => "STANDARD_VM_FIXED3400_X9_50G",
        StandardVmFixed3500X950g => "STANDARD_VM_FIXED3500_X9_50G",
        StandardVmFixed3600X950g => "STANDARD_VM_FIXED3600_X9_50G",
        StandardVmFixed3700X950g => "STANDARD_VM_FIXED3700_X9_50G",
        StandardVmFixed3800X950g => "STANDARD_VM_FIXED3800_X9_50G",
        StandardVmFixed3900X950g => "STANDARD_VM_FIXED3900_X9_50G",
        StandardVmFixed4000X950g => "STANDARD_VM_FIXED4000_X9_50G",
        EntirehostX950g => "ENTIREHOST_X9_50G",
    }
}
