//! Precomputed saturation curve.
//!
//! Generated offline; do not edit by hand. Entry `i` samples the normalised
//! hyperbolic tangent at `x = -2 + i / 256`:
//!
//! ```text
//! table[i] = round(16384 * (0.5 + 0.5 * tanh(x) / tanh(2)))
//! ```
//!
//! so the curve runs from exactly 0 at `x = -2` to exactly `1 << 14` at
//! `x = +2`, monotonically non-decreasing. The `table_matches_generator`
//! test in [`crate::saturation`] re-derives every entry.

/// Normalised tanh curve, 1025 entries of 14-bit magnitude.
#[rustfmt::skip]
pub static TANH_TABLE: [i16; 1025] = [
    0, 2, 5, 7, 10, 12, 14, 17, 19, 22, 24, 27,
    29, 32, 35, 37, 40, 43, 45, 48, 51, 53, 56, 59,
    62, 64, 67, 70, 73, 76, 79, 82, 85, 88, 91, 94,
    97, 100, 103, 106, 109, 113, 116, 119, 122, 126, 129, 132,
    135, 139, 142, 146, 149, 153, 156, 160, 163, 167, 170, 174,
    178, 181, 185, 189, 192, 196, 200, 204, 208, 212, 216, 220,
    224, 228, 232, 236, 240, 244, 248, 252, 257, 261, 265, 270,
    274, 278, 283, 287, 292, 296, 301, 305, 310, 315, 319, 324,
    329, 333, 338, 343, 348, 353, 358, 363, 368, 373, 378, 383,
    389, 394, 399, 404, 410, 415, 420, 426, 431, 437, 442, 448,
    454, 459, 465, 471, 477, 483, 488, 494, 500, 506, 512, 519,
    525, 531, 537, 543, 550, 556, 562, 569, 575, 582, 589, 595,
    602, 609, 615, 622, 629, 636, 643, 650, 657, 664, 671, 679,
    686, 693, 701, 708, 716, 723, 731, 738, 746, 754, 761, 769,
    777, 785, 793, 801, 809, 817, 826, 834, 842, 851, 859, 868,
    876, 885, 894, 902, 911, 920, 929, 938, 947, 956, 965, 974,
    984, 993, 1002, 1012, 1021, 1031, 1041, 1050, 1060, 1070, 1080, 1090,
    1100, 1110, 1120, 1130, 1141, 1151, 1161, 1172, 1182, 1193, 1204, 1215,
    1225, 1236, 1247, 1258, 1270, 1281, 1292, 1303, 1315, 1326, 1338, 1350,
    1361, 1373, 1385, 1397, 1409, 1421, 1433, 1445, 1458, 1470, 1482, 1495,
    1508, 1520, 1533, 1546, 1559, 1572, 1585, 1598, 1611, 1625, 1638, 1652,
    1665, 1679, 1692, 1706, 1720, 1734, 1748, 1762, 1777, 1791, 1805, 1820,
    1834, 1849, 1864, 1879, 1894, 1909, 1924, 1939, 1954, 1969, 1985, 2000,
    2016, 2032, 2048, 2063, 2079, 2095, 2112, 2128, 2144, 2161, 2177, 2194,
    2210, 2227, 2244, 2261, 2278, 2295, 2313, 2330, 2347, 2365, 2383, 2400,
    2418, 2436, 2454, 2472, 2490, 2509, 2527, 2546, 2564, 2583, 2602, 2620,
    2639, 2658, 2678, 2697, 2716, 2736, 2755, 2775, 2795, 2815, 2835, 2855,
    2875, 2895, 2915, 2936, 2956, 2977, 2998, 3019, 3039, 3060, 3082, 3103,
    3124, 3146, 3167, 3189, 3211, 3232, 3254, 3276, 3299, 3321, 3343, 3366,
    3388, 3411, 3433, 3456, 3479, 3502, 3525, 3549, 3572, 3595, 3619, 3643,
    3666, 3690, 3714, 3738, 3762, 3786, 3811, 3835, 3860, 3884, 3909, 3934,
    3959, 3984, 4009, 4034, 4059, 4085, 4110, 4136, 4161, 4187, 4213, 4239,
    4265, 4291, 4317, 4344, 4370, 4397, 4423, 4450, 4477, 4504, 4531, 4558,
    4585, 4612, 4640, 4667, 4695, 4722, 4750, 4778, 4806, 4834, 4862, 4890,
    4918, 4946, 4975, 5003, 5032, 5060, 5089, 5118, 5147, 5176, 5205, 5234,
    5263, 5292, 5322, 5351, 5381, 5410, 5440, 5470, 5500, 5530, 5560, 5590,
    5620, 5650, 5680, 5710, 5741, 5771, 5802, 5832, 5863, 5894, 5925, 5956,
    5986, 6017, 6048, 6080, 6111, 6142, 6173, 6205, 6236, 6268, 6299, 6331,
    6362, 6394, 6426, 6457, 6489, 6521, 6553, 6585, 6617, 6649, 6681, 6713,
    6746, 6778, 6810, 6843, 6875, 6907, 6940, 6972, 7005, 7037, 7070, 7103,
    7135, 7168, 7201, 7233, 7266, 7299, 7332, 7365, 7398, 7431, 7464, 7496,
    7529, 7562, 7595, 7629, 7662, 7695, 7728, 7761, 7794, 7827, 7860, 7893,
    7927, 7960, 7993, 8026, 8059, 8092, 8126, 8159, 8192, 8225, 8258, 8292,
    8325, 8358, 8391, 8424, 8457, 8491, 8524, 8557, 8590, 8623, 8656, 8689,
    8722, 8755, 8789, 8822, 8855, 8888, 8920, 8953, 8986, 9019, 9052, 9085,
    9118, 9151, 9183, 9216, 9249, 9281, 9314, 9347, 9379, 9412, 9444, 9477,
    9509, 9541, 9574, 9606, 9638, 9671, 9703, 9735, 9767, 9799, 9831, 9863,
    9895, 9927, 9958, 9990, 10022, 10053, 10085, 10116, 10148, 10179, 10211, 10242,
    10273, 10304, 10336, 10367, 10398, 10428, 10459, 10490, 10521, 10552, 10582, 10613,
    10643, 10674, 10704, 10734, 10764, 10794, 10824, 10854, 10884, 10914, 10944, 10974,
    11003, 11033, 11062, 11092, 11121, 11150, 11179, 11208, 11237, 11266, 11295, 11324,
    11352, 11381, 11409, 11438, 11466, 11494, 11522, 11550, 11578, 11606, 11634, 11662,
    11689, 11717, 11744, 11772, 11799, 11826, 11853, 11880, 11907, 11934, 11961, 11987,
    12014, 12040, 12067, 12093, 12119, 12145, 12171, 12197, 12223, 12248, 12274, 12299,
    12325, 12350, 12375, 12400, 12425, 12450, 12475, 12500, 12524, 12549, 12573, 12598,
    12622, 12646, 12670, 12694, 12718, 12741, 12765, 12789, 12812, 12835, 12859, 12882,
    12905, 12928, 12951, 12973, 12996, 13018, 13041, 13063, 13085, 13108, 13130, 13152,
    13173, 13195, 13217, 13238, 13260, 13281, 13302, 13324, 13345, 13365, 13386, 13407,
    13428, 13448, 13469, 13489, 13509, 13529, 13549, 13569, 13589, 13609, 13629, 13648,
    13668, 13687, 13706, 13726, 13745, 13764, 13782, 13801, 13820, 13838, 13857, 13875,
    13894, 13912, 13930, 13948, 13966, 13984, 14001, 14019, 14037, 14054, 14071, 14089,
    14106, 14123, 14140, 14157, 14174, 14190, 14207, 14223, 14240, 14256, 14272, 14289,
    14305, 14321, 14336, 14352, 14368, 14384, 14399, 14415, 14430, 14445, 14460, 14475,
    14490, 14505, 14520, 14535, 14550, 14564, 14579, 14593, 14607, 14622, 14636, 14650,
    14664, 14678, 14692, 14705, 14719, 14732, 14746, 14759, 14773, 14786, 14799, 14812,
    14825, 14838, 14851, 14864, 14876, 14889, 14902, 14914, 14926, 14939, 14951, 14963,
    14975, 14987, 14999, 15011, 15023, 15034, 15046, 15058, 15069, 15081, 15092, 15103,
    15114, 15126, 15137, 15148, 15159, 15169, 15180, 15191, 15202, 15212, 15223, 15233,
    15243, 15254, 15264, 15274, 15284, 15294, 15304, 15314, 15324, 15334, 15343, 15353,
    15363, 15372, 15382, 15391, 15400, 15410, 15419, 15428, 15437, 15446, 15455, 15464,
    15473, 15482, 15490, 15499, 15508, 15516, 15525, 15533, 15542, 15550, 15558, 15567,
    15575, 15583, 15591, 15599, 15607, 15615, 15623, 15630, 15638, 15646, 15653, 15661,
    15668, 15676, 15683, 15691, 15698, 15705, 15713, 15720, 15727, 15734, 15741, 15748,
    15755, 15762, 15769, 15775, 15782, 15789, 15795, 15802, 15809, 15815, 15822, 15828,
    15834, 15841, 15847, 15853, 15859, 15865, 15872, 15878, 15884, 15890, 15896, 15901,
    15907, 15913, 15919, 15925, 15930, 15936, 15942, 15947, 15953, 15958, 15964, 15969,
    15974, 15980, 15985, 15990, 15995, 16001, 16006, 16011, 16016, 16021, 16026, 16031,
    16036, 16041, 16046, 16051, 16055, 16060, 16065, 16069, 16074, 16079, 16083, 16088,
    16092, 16097, 16101, 16106, 16110, 16114, 16119, 16123, 16127, 16132, 16136, 16140,
    16144, 16148, 16152, 16156, 16160, 16164, 16168, 16172, 16176, 16180, 16184, 16188,
    16192, 16195, 16199, 16203, 16206, 16210, 16214, 16217, 16221, 16224, 16228, 16231,
    16235, 16238, 16242, 16245, 16249, 16252, 16255, 16258, 16262, 16265, 16268, 16271,
    16275, 16278, 16281, 16284, 16287, 16290, 16293, 16296, 16299, 16302, 16305, 16308,
    16311, 16314, 16317, 16320, 16322, 16325, 16328, 16331, 16333, 16336, 16339, 16341,
    16344, 16347, 16349, 16352, 16355, 16357, 16360, 16362, 16365, 16367, 16370, 16372,
    16374, 16377, 16379, 16382, 16384,
];
