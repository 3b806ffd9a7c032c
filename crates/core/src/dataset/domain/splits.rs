//! Official KIA dataset splits.
//!
//! Per tranche and company, `TRAIN_*` sequences may be used for training,
//! `VAL_*` for validation during training and `TEST_*` only for the final
//! evaluation. Not every tranche has a dedicated split. `<COMPANY>_TRANCHE_<n>`
//! holds every sequence of a tranche.

pub const BIT_TRANCHE_1: &[&str] = &[
    "bit_results_sequence_0001-ca2bc3fda17b46faa33eb1dbf483d1b9",
    "bit_results_sequence_0001-ca2bc3fda17b46faa33eb1dbf483d1b9",
    "bit_results_sequence_0002-2b254a8bf22f41f197424030d58ae18d",
    "bit_results_sequence_0003-aec3e63377f5439fa0d6aadbcc84204b",
    "bit_results_sequence_0004-9afafde5e5ad4cb3aaa3cb83aa44e242",
    "bit_results_sequence_0005-e9fb073f1890427a8e3c961e0027ed90",
    "bit_results_sequence_0006-7a78e17c663d45099c9fec562d639e2c",
    "bit_results_sequence_0007-8b4c0c8aa97e4122aa20db173facd890",
    "bit_results_sequence_0008-daa6ce9d57334663bb70e15db04dbb4a",
    "bit_results_sequence_0009-fe663340e0be436196d08ca11076876b",
    "bit_results_sequence_0010-352cf6bfd299464f94e43c6e943d1a58",
    "bit_results_sequence_0011-5bf68d0bb6ce494ca86a3adb51f7acf6",
    "bit_results_sequence_0012-c7df298126f54945ba25c44f57cd796f",
    "bit_results_sequence_0013-9422e3791e2a4ef0b9d388fcf2236c24",
    "bit_results_sequence_0014-70319f26eaed46ab91a9e2e2f627b590",
    "bit_results_sequence_0015-aac2a7a736224bf9879512ad1897e30f",
    "bit_results_sequence_0016-9a2fc979c795437aa0aa5d1a16c5d141",
    "bit_results_sequence_0017-92f14287e8a6477fbd1db636c3a2761f",
    "bit_results_sequence_0018-842ddc8950104d18ab115c3a95e29571",
    "bit_results_sequence_0019-ffe3df6c54fc4129876004824bd8872d",
    "bit_results_sequence_0020-f294167d61904360b9b0570696753072",
    "bit_results_sequence_0021-cc908b1da04a4e7ca1174a2c8cad155a",
    "bit_results_sequence_0022-52fbcdb7a4c240a0a012a99288f77757",
    "bit_results_sequence_0023-3dfd033be7954ac68b12b6b9f52c2d57",
    "bit_results_sequence_0024-005fa1ee35e941af99ecdbb722a12160",
];

pub const TRAIN_BIT_TRANCHE_2: &[&str] = &[
    "bit_results_sequence_0025-4beaace23b6d4d05a0373f2b0973f1f1",
    "bit_results_sequence_0026-756f83ad3bf04f74910af85f3e1edbfc",
    "bit_results_sequence_0027-b82518c4082a4180ae1a155cde5714ce",
    "bit_results_sequence_0028-d2a92fc6c8854c7a843d8218b70d3850",
    "bit_results_sequence_0029-4866ce99e9074b58a215408ca46c5d3a",
    "bit_results_sequence_0030-fc34c3fd51f448058516390af529ced4",
    "bit_results_sequence_0031-ef950d0778e44e9a8e5ad0b51c924b56",
    "bit_results_sequence_0032-e55bfe3e76e74c239657de86bcddb3d9",
    "bit_results_sequence_0033-1813b659171342f5a58729c5c326f0c3",
    "bit_results_sequence_0034-ce8e16f9af7049828b2e7018bd1edae7",
    "bit_results_sequence_0035-4c9cebe455fb484cb704c076a139009e",
    "bit_results_sequence_0036-3ddda3663f2744deb2730a3ff533a83a",
    "bit_results_sequence_0037-1a426b274409481ab9be6a9edcce5165",
    "bit_results_sequence_0038-8071ac915cc84150a822dd051307036c",
    "bit_results_sequence_0039-47a96215515f4ff7961fe3ceda93413c",
    "bit_results_sequence_0040-dfd2d3c14dc444e2a57b93221ece8f3b",
    "bit_results_sequence_0041-52f020a505ef4532aa35c7920c31192a",
    "bit_results_sequence_0042-ef2801d2f53948a68f66dd7abe87f08f",
    "bit_results_sequence_0043-914fbabecd554990aa43b7e25e76d364",
    "bit_results_sequence_0044-f275007ea89a4450afe2b74f23e29abc",
    "bit_results_sequence_0045-0a3a3672eabf43b2aa7c534e0c1434cd",
    "bit_results_sequence_0046-77c24d90fa1a479b9ddea4af9b6aa122",
    "bit_results_sequence_0047-2c228631b4854ab69a3bcdd8f2dc96a8",
    "bit_results_sequence_0048-c73af228b39c4a04985f3fab0a528f63",
    "bit_results_sequence_0049-553ac5ba347148f5a73acd16cd90cc97",
    "bit_results_sequence_0050-b4bf54803c2a4e898f988beff3c2031d",
    "bit_results_sequence_0051-956986134ccf4aecb2e11907db63dbc3",
    "bit_results_sequence_0052-996c54f40f7e4fbf8ff04a92ac8de874",
    "bit_results_sequence_0053-2dcb5cdd72754b4ea6861acaf855af24",
    "bit_results_sequence_0054-92c82ca99537483cba71a14ab3005802",
    "bit_results_sequence_0055-24f59334a9c04cef8e081e5a35f82bd5",
    "bit_results_sequence_0056-45645575f05d481696b41604166d0d40",
    "bit_results_sequence_0057-fcaa55bd97f5466a86bf1dfccd465f3b",
];

pub const VAL_BIT_TRANCHE_2: &[&str] = &[
    "bit_results_sequence_0058-9088659e1c2b4d4d9a560f1ad7bbcade",
    "bit_results_sequence_0059-66412eb6563244a4a8404d598989dafe",
    "bit_results_sequence_0060-07eecb79d532468d92db523c53219963",
    "bit_results_sequence_0061-46608f35d1554f70aae7839b1b395bd4",
    "bit_results_sequence_0062-2c07143eb7654524b9ccf600d06c1409",
    "bit_results_sequence_0063-045e48798e78468aad1e202f7369b0dc",
];

pub const TEST_BIT_TRANCHE_2: &[&str] = &[
    "bit_results_sequence_0064-62cc7801608e432fabe7d5dd31ef539a",
    "bit_results_sequence_0065-e89b45c30925426a8ff9c08b1aedd9df",
    "bit_results_sequence_0066-5cef52d687754a39927116d6cc2ce2f0",
    "bit_results_sequence_0067-2019f23b516a43ad905c7c26f79e3893",
    "bit_results_sequence_0068-97d348da5bcc432cbe596cc4ffbd3311",
    "bit_results_sequence_0069-9ee31866e95b47cca8f4f124379355a5",
];

pub const TRAIN_BIT_TRANCHE_3: &[&str] = &[
    "bit_results_sequence_0070-8de675d2f59e44a3aa68a6d450d9b949",
    "bit_results_sequence_0071-3e821f9967564c6ba1781cba477377a7",
    "bit_results_sequence_0072-7bd44c07de4840bf92a79ef9eeee66be",
    "bit_results_sequence_0073-2155f0496707449190bdb9e71531dccd",
    "bit_results_sequence_0074-7f7e186e218a483aa8c6de3c75684575",
    "bit_results_sequence_0075-5dd197410b6048c9a792113f279951a9",
    "bit_results_sequence_0076-f74f44e688d94d518a05e9ad3a9066d0",
    "bit_results_sequence_0079-ffc44024e73c4e189af9f64f4197b34b",
    "bit_results_sequence_0080-52c031bc9dc04c2d9810b52034bae35d",
    "bit_results_sequence_0081-9b65d36eb67f4eda80cb01323d0e66a6",
    "bit_results_sequence_0082-45838a1c393549e395bef509b72cac50",
    "bit_results_sequence_0083-5cc03ffadf74451696b2e76d20fbd3ae",
    "bit_results_sequence_0084-5de2fea8bf12432fa21466b4771e1de2",
    "bit_results_sequence_0085-13dd2ea45b3944558684ec03a25ac345",
    "bit_results_sequence_0086-67e9d73aad624f8b9066427fa2f7df82",
    "bit_results_sequence_0087-c5eb4a1e2c4f4468a1926edd695ebf10",
    "bit_results_sequence_0088-eadaa13c6efa4f20943bcf8faf8ab8b2",
    "bit_results_sequence_0089-dd469e143995456faea6bf635b5841bf",
    "bit_results_sequence_0090-334fc4453a6144f8a6ff9956ecb9e864",
    "bit_results_sequence_0091-ed2d75b6bfb94b888e1ac2c10453286f",
    "bit_results_sequence_0092-ca68eb295c8e4e9e8c90615a6308d02e",
    "bit_results_sequence_0093-a3d4b834759141c39e15c5669032101b",
    "bit_results_sequence_0094-1858396943784168815b52bc18a8e6e6",
    "bit_results_sequence_0095-925287c8f7c0425f969740afae82a74a",
    "bit_results_sequence_0096-630ae7d8f2104df688a724f54db9db64",
    "bit_results_sequence_0097-91c01e5a5cb44b468138595a3229b7af",
    "bit_results_sequence_0098-563e8121394c42f4af05ebc4194792fe",
    "bit_results_sequence_0099-d1b7ae916f9746f7a778a25a57fb66db",
    "bit_results_sequence_0100-9e8811d4e8f245c384225fef0a10d8f0",
    "bit_results_sequence_0101-32581485420d44cda0dc9bc7cdbf2c54",
    "bit_results_sequence_0102-7479601eb04a4e3292b9b7a84a19ff46",
    "bit_results_sequence_0103-faa76a00b3d348af93c3f10a5de1b041",
    "bit_results_sequence_0105-e04f253a90ec42209b8a9e1a841b29c7",
    "bit_results_sequence_0107-6ed30e3c58044af1a79f3ee3f5c77271",
    "bit_results_sequence_0124-614c864d75674f33a7ccd036237b40fa",
];

pub const VAL_BIT_TRANCHE_3: &[&str] = &[
    "bit_results_sequence_0077-fd3a1bea3fc845d5bed8eb2b25df852c",
    "bit_results_sequence_0078-55a9e3d1ea32466cb23f1772e62c7051",
    "bit_results_sequence_0104-856339aaf1744da4b72621b2f5c220ea",
    "bit_results_sequence_0106-87a35332aaa74f4ba961941040a9fc22",
    "bit_results_sequence_0108-7bc993c7935c4551b5c0629db336d28d",
    "bit_results_sequence_0114-b81ff102d0b343509f0378c84300c8f1",
    "bit_results_sequence_0116-33b646bb827e4bb2b65c7c52f482cc18",
    "bit_results_sequence_0125-513f98eacd314edeb49da18a2d6c74ec",
];

pub const TEST_BIT_TRANCHE_3: &[&str] = &[
    "bit_results_sequence_0109-564e8af4f42b458caa3aa989dc0e7da1",
    "bit_results_sequence_0110-b5a81bec38f445f0b5f5fb75bcb76d6c",
    "bit_results_sequence_0111-724ea5c61e6f4254a87e339625db44a6",
    "bit_results_sequence_0112-6422955af3ee49a289d2611b0e001489",
    "bit_results_sequence_0115-4876ec19e85c47bb8d19c6188237e78e",
    "bit_results_sequence_0117-4d70e7bbdd67472e8daff9a510f0f160",
    "bit_results_sequence_0118-c8643bda8d334ff381a2e4e16318d463",
    "bit_results_sequence_0119-29c8120e3a384d7482a286cc89460e0b",
    "bit_results_sequence_0120-91f354c93d144d2e859ed3cb9a8c69f7",
    "bit_results_sequence_0121-6c23009bed0f4da29e5cc2c31abef8b1",
    "bit_results_sequence_0122-b9deaea30d6b4467b835407388cb8fbf",
    "bit_results_sequence_0123-267a5dc6210a445f8fac2a5fa68b49f4",
    "bit_results_sequence_0126-a27ead8dcc9443f699b634e9fe3a15e3",
    "bit_results_sequence_0127-b1b23f12104a45789b6bc19458579b82",
];

pub const TRAIN_BIT_TRANCHE_4_DYNAMIC: &[&str] = &[
    "bit_results_sequence_0149-4c0e36fef9394df0bc7558a7187fb53f",
    "bit_results_sequence_0150-3bbbcf77421040139102b786c1026f24",
    "bit_results_sequence_0151-fc112ac1b90f4b9e9221543460d5eac0",
    "bit_results_sequence_0152-18a097b800704cd2ba4ae4a937820f13",
    "bit_results_sequence_0153-97588181ad4f42f49c11cd2264e5fa01",
    "bit_results_sequence_0154-aae134a550c2462fa2dd5b87619c73db",
    "bit_results_sequence_0155-c5885dc8f0174b038ecd7416bb68a4e4",
    "bit_results_sequence_0156-e4cfa019fdda41a19fdf60b5f6e7d981",
];

pub const VAL_BIT_TRANCHE_4_DYNAMIC: &[&str] = &[
    "bit_results_sequence_0147-4d53650ffc4a49909671fd74ed6beec0",
    "bit_results_sequence_0148-d71bbded97534c09bd7e10af03c37323",
];

pub const TEST_BIT_TRANCHE_4_DYNAMIC: &[&str] = &[];

pub const TRAIN_BIT_TRANCHE_4_STATIC: &[&str] = &[
    "bit_results_sequence_0177-f256ff87158c40a4bded781bcd427d60",
    "bit_results_sequence_0178-2f997f13c6474d45b338ad67644a1b2d",
    "bit_results_sequence_0179-21032ac691f24ce087ab3c4cc3a0b5fc",
    "bit_results_sequence_0180-060fba0d64744724aafe39a1e45fc6e1",
    "bit_results_sequence_0181-b79af3034b54420ab93c5bbe8d8009ca",
    "bit_results_sequence_0182-1c488d65f3af4b73bb81e12c26209730",
    "bit_results_sequence_0184-4ee2861981f44690b12c42aedd7b7359",
    "bit_results_sequence_0185-195e048967e24bcdb709dc3d803e9e55",
    "bit_results_sequence_0187-c29cb10799304d7ca459483d51701e54",
    "bit_results_sequence_0192-4fcdd040d5264cf08fa9ad4fce6313f7",
    "bit_results_sequence_0193-c01415c9c5a940a4acdfd09c6bcb2de5",
    "bit_results_sequence_0194-bb51bd95675c466baba0a399d421d55f",
    "bit_results_sequence_0211-fb32183497c34de4b9696aa3c3a48640",
    "bit_results_sequence_0212-68787ea2d23c48daa21c8792987fd8eb",
    "bit_results_sequence_0213-3a35e69cdd98464a9aa6ed841c56a5c8",
    "bit_results_sequence_0214-882545f9069042d4b44e9551bdcbe2ef",
    "bit_results_sequence_0215-d40c77b1bda64aedb87a32a79e450833",
    "bit_results_sequence_0216-f309d24fe71c460a82f6be1d47af3606",
];

pub const VAL_BIT_TRANCHE_4_STATIC: &[&str] = &[
    "bit_results_sequence_0171-ba9162a2b5af48c6a94e9ab99ef658bd",
    "bit_results_sequence_0172-d13f8b0cf1b84c6498512bb99e369a36",
    "bit_results_sequence_0173-073d14d72577491abb76e865ce119c91",
];

pub const TEST_BIT_TRANCHE_4_STATIC: &[&str] = &[
    "bit_results_sequence_0174-54c7c84860b442eca995b153754b8c37",
    "bit_results_sequence_0209-322405fa2a264f4499ffbf93e5ee17e0",
];

pub const TRAIN_BIT_TRANCHE_5_DYNAMIC: &[&str] = &[
    "bit_results_sequence_0263-c372600fd89a45d188a9c664b5ebbed7",
];

pub const VAL_BIT_TRANCHE_5_DYNAMIC: &[&str] = &[
    "bit_results_sequence_0250-018426edb1af4f6aaf85bd08e86e4fbc",
];

pub const TEST_BIT_TRANCHE_5_DYNAMIC: &[&str] = &[
    "bit_results_sequence_0251-253e6b8cbeed4395bab7f2948eb9fd81",
    "bit_results_sequence_0252-0f5feb086bb444bfaf872ede1f733cef",
    "bit_results_sequence_0301-1d3cff0469f546e0ab996031cec8375b",
    "bit_results_sequence_0302-7e6ab39962ec4b02a5a764b9226132a7",
    "bit_results_sequence_0303-8cfd2b8a8a6146a399403bcad690cc46",
    "bit_results_sequence_0484-2042f3ebfc7948d5bd6b1b8823aef556",
];

pub const TRAIN_BIT_TRANCHE_5_STATIC: &[&str] = &[
    "bit_results_sequence_0270-e58a46e8ba634a66899cf1bb1d2f1e0b",
];

pub const VAL_BIT_TRANCHE_5_STATIC: &[&str] = &[];

pub const TEST_BIT_TRANCHE_5_STATIC: &[&str] = &[
    "bit_results_sequence_0264-adfde56a1b1f449798b556eb55925caa",
    "bit_results_sequence_0265-045ade553db44e31ad5fc2f625f866a5",
    "bit_results_sequence_0271-a52901e61f1b499b9d42469ab9463393",
    "bit_results_sequence_0272-aa1940558efa4b5ea6987a776c5bae84",
    "bit_results_sequence_0273-5f4b1ef966ce45228b92239f6de8a9ba",
    "bit_results_sequence_0310-348fd27a157e45f4b61c27221e6a585a",
    "bit_results_sequence_0311-461fdc066cc24623b9aad0ce22d25e90",
    "bit_results_sequence_0312-d7f794f950504b329f12c3b7480a2c6d",
    "bit_results_sequence_0320-dd7e7f6159f543fd97d5333bd2a44261",
    "bit_results_sequence_0321-62888640c8184505ac3c9a133bad984e",
    "bit_results_sequence_0322-b6bbbebf253e4808abf57f0c30fb5b34",
];

pub const MV_TRANCHE_1: &[&str] = &[
    "mv_results_sequence_0001_e37849c39fb953e9a19080c62eea5842",
    "mv_results_sequence_0002_a82c20dd838f5bcbb982fff99201904a",
    "mv_results_sequence_0003_eb8c99310bd556ac9e7fe07bc5217bf4",
    "mv_results_sequence_0004_5771c39e29755afcb0e15ceae193fefe",
    "mv_results_sequence_0005_3968374741565823b14b9f1a1a40e18c",
    "mv_results_sequence_0006_0159943674a15552b6758409c5492350",
    "mv_results_sequence_0007_0d61d3eb183c51b2a23bfcd85b723b68",
    "mv_results_sequence_0008_b96c7d31e52c59f8a914ea0fe1d21bb1",
    "mv_results_sequence_0009_588c2559bd1a57b6a2daae5d56017427",
    "mv_results_sequence_0010_0bce13cbfbdd5dba917eea1d796f6ecd",
    "mv_results_sequence_0011_5d6c4d1a08f659769d762f9477a3e37d",
    "mv_results_sequence_0012_aaf119dcf7b85989a2ced26a02283945",
    "mv_results_sequence_0013_c3c8f1aff19658aaa218c4d0083911da",
];

pub const MV_TRANCHE_2: &[&str] = &[
    "mv_results_sequence_0027_31885cc26e9b5b119b34a2a87d1044c7",
    "mv_results_sequence_0028_6b04b294845a5698a9463609548aaa2f",
    "mv_results_sequence_0029_82827fbdbba85d4ba060d2a3252e87b3",
    "mv_results_sequence_0030_3b8f58f1d9a3545a8cdcd9c8a0d9eb3c",
    "mv_results_sequence_0031_8c24a07d4de05eeda39c12e6fa2fe67b",
    "mv_results_sequence_0032_25d4681c408359a09d33644dc56e4984",
    "mv_results_sequence_0033_84aff120c49e5c49b332f0a1980c149a",
    "mv_results_sequence_0034_465101684afb5b96b0c8de2f40807c6a",
    "mv_results_sequence_0035_198554b8a7305c6f88fd4f7b8da9ffcd",
    "mv_results_sequence_0036_890c0757fb9a53d9a8b76b9d321e1a86",
    "mv_results_sequence_0037_556d5db9c3705dd9b6283ec6b399ecd2",
    "mv_results_sequence_0038_15fb7351e4b85576ac3f02a04df50c57",
    "mv_results_sequence_0039_426080faccb657bc970ff813d0f5e83a",
];

pub const TRAIN_MV_TRANCHE_4: &[&str] = &[
    "mv_results_sequence_0040_beac809a71b543798474e44bcc61c31d",
    "mv_results_sequence_0041_9d338b0348ca445b9573255f32ac1c1d",
    "mv_results_sequence_0042_ba3e06b52c814854b726d1cd270a32cd",
    "mv_results_sequence_0043_5ca6bdef77c74d2ebb2ee575831ed1a5",
    "mv_results_sequence_0044_bbfe9b85fd1042ae9f7862d27e13604f",
    "mv_results_sequence_0045_2aa99ff8db43437a96769a46d7441af7",
    "mv_results_sequence_0051_dca114b1114e4245a3badbb5f370b6a8",
];

pub const VAL_MV_TRANCHE_4: &[&str] = &[
    "mv_results_sequence_0046_d564d18e4ec14205ab84707fe9366e5c",
];

pub const TEST_MV_TRANCHE_4: &[&str] = &[
    "mv_results_sequence_0047_03f10c4336dc4d85a527ae7e2bfe15f2",
    "mv_results_sequence_0048_3162767e837d4ee18eb2ff2c32186949",
    "mv_results_sequence_0050_caae51aed41c495793865135c856e3bb",
];

pub const TRAIN_MV_TRANCHE_5: &[&str] = &[
    "mv_results_sequence_0053_849d9b8b2c78442c8d3d81562a1ad10a",
    "mv_results_sequence_0056_3b99df6d380448e5ae94386a502ed1ed",
    "mv_results_sequence_0061_f32d780a2fc84b6db3e5d94337c2ba76",
];

pub const VAL_MV_TRANCHE_5: &[&str] = &[
    "mv_results_sequence_0057_56648521b41744be93a4d2b94a6d9432",
];

pub const TEST_MV_TRANCHE_5: &[&str] = &[
    "mv_results_sequence_0052_b9f1277e3fb6499695bca98d88ce8e4e",
    "mv_results_sequence_0054_357d946f054b48ce9fc43c1d47183be2",
    "mv_results_sequence_0055_1dab4c8b18934b2499fdd1df10d4a91c",
    "mv_results_sequence_0058_eba9f412b55746a292ceaf90cbea8d36",
    "mv_results_sequence_0059_010b349bb4c643a9bca420413605d878",
    "mv_results_sequence_0060_1597c400387847048e102505d2e7f8ad",
    "mv_results_sequence_0062_acbcdc0eb23743869b8a78b1e7ac168b",
    "mv_results_sequence_0063_ed44fc840df6421e9a7e41bd30b2950c",
    "mv_results_sequence_0064_224b973925d84f208a377fda185d842f",
];

pub const TRAIN_MV_TRANCHE_6: &[&str] = &[
    "mv_results_sequence_0066_93ae77d052394a5eb3b03aab5c9c3c14",
    "mv_results_sequence_0067_e78d51ef67fa448db0ca6387b7366f50",
];

pub const VAL_MV_TRANCHE_6: &[&str] = &[];

pub const TEST_MV_TRANCHE_6: &[&str] = &[
    "mv_results_sequence_0065_a22915a1081d44518e1916b85417fc07",
    "mv_results_sequence_0068_db25e2b8ee2d4058aac0277211b077e1",
    "mv_results_sequence_0069_a802056d2d0c49399f8adb7c81ee2b04",
    "mv_results_sequence_0070_6c33cea450f745e38c156a8d13d2fad3",
    "mv_results_sequence_0071_f0a292d2f8da45adb9d462bd9a3c0e60",
    "mv_results_sequence_0072_050c2b2d45af4ffabfdb1b28bea9e26c",
    "mv_results_sequence_0073_587e46d660c642e0bf61f8e6376b1ba9",
    "mv_results_sequence_0074_9b7acfc0bf5d477280320a66fa3f6f49",
    "mv_results_sequence_0075_1207ac3ea0b3473484f0e417dc6b5e66",
    "mv_results_sequence_0076_588681de7605446fb6f68f570227cbfa",
];

pub const TEST_MV_TRANCHE_6_DOMAIN_ADAPTATION: &[&str] = &[
    "mv_results_sequence_0077_f42cd52e06244d63b9a9a6a7aa9e2fd1",
    "mv_results_sequence_0078_70f0f5bb6a9f4f7b970a149906f686b3",
    "mv_results_sequence_0079_f21202d6d8cd48839189d2457acbd489",
    "mv_results_sequence_0080_683db0458dd048f48430dfdfcc3d709b",
    "mv_results_sequence_0081_a91c9c209cd146ba862e229097a19772",
    "mv_results_sequence_0082_4e94fbd288a640dfb29b7805c634e7e1",
];

pub const TRAIN_MV_TRANCHE_7: &[&str] = &[
    "mv_results_sequence_0083_1d2b8ce833854587928e2a0d2e38ae46",
    "mv_results_sequence_0090_d451639322d144a7b7d3b8bcfc4b681d",
    "mv_results_sequence_0091_5b55471851cb441091578854dfa9da56",
];

pub const VAL_MV_TRANCHE_7: &[&str] = &[
    "mv_results_sequence_0095_d26cfb610d064747b4599a1f2e150aa2",
];

pub const TEST_MV_TRANCHE_7: &[&str] = &[
    "mv_results_sequence_0084_33190a04594547f3b126ec5d7be1ac8d",
    "mv_results_sequence_0085_c3c573057ae34c47b003d5a4ca8fbc71",
    "mv_results_sequence_0086_784de372be1a4629bb9f7bc9251c1645",
    "mv_results_sequence_0087_a90b28605c3b4c8ca1f62a271e082c5d",
    "mv_results_sequence_0088_60dae98803fc4ad7bc9f51e023c6a1e6",
    "mv_results_sequence_0089_6c1eeba5f5b84791a56e560bf27e86b2",
    "mv_results_sequence_0092_373bc859a41f4ae99b6ef3cdde9f3975",
    "mv_results_sequence_0093_f377cafae31a450d883d6b0ea860dbdb",
    "mv_results_sequence_0094_804ccde1d7a447df8012915ba873154b",
    "mv_results_sequence_0096_86a1c4741e7c49ef9286db7f5a4413bb",
];

/// Split name and the sequence lists it concatenates.
const SPLITS: &[(&str, &[&[&str]])] = &[
    ("BIT_TRANCHE_1", &[BIT_TRANCHE_1]),
    ("TRAIN_BIT_TRANCHE_2", &[TRAIN_BIT_TRANCHE_2]),
    ("VAL_BIT_TRANCHE_2", &[VAL_BIT_TRANCHE_2]),
    ("TEST_BIT_TRANCHE_2", &[TEST_BIT_TRANCHE_2]),
    ("BIT_TRANCHE_2", &[TRAIN_BIT_TRANCHE_2, VAL_BIT_TRANCHE_2, TEST_BIT_TRANCHE_2]),
    ("TRAIN_BIT_TRANCHE_3", &[TRAIN_BIT_TRANCHE_3]),
    ("VAL_BIT_TRANCHE_3", &[VAL_BIT_TRANCHE_3]),
    ("TEST_BIT_TRANCHE_3", &[TEST_BIT_TRANCHE_3]),
    ("BIT_TRANCHE_3", &[TRAIN_BIT_TRANCHE_3, VAL_BIT_TRANCHE_3, TEST_BIT_TRANCHE_3]),
    ("TRAIN_BIT_TRANCHE_4_DYNAMIC", &[TRAIN_BIT_TRANCHE_4_DYNAMIC]),
    ("VAL_BIT_TRANCHE_4_DYNAMIC", &[VAL_BIT_TRANCHE_4_DYNAMIC]),
    ("TEST_BIT_TRANCHE_4_DYNAMIC", &[TEST_BIT_TRANCHE_4_DYNAMIC]),
    ("TRAIN_BIT_TRANCHE_4_STATIC", &[TRAIN_BIT_TRANCHE_4_STATIC]),
    ("VAL_BIT_TRANCHE_4_STATIC", &[VAL_BIT_TRANCHE_4_STATIC]),
    ("TEST_BIT_TRANCHE_4_STATIC", &[TEST_BIT_TRANCHE_4_STATIC]),
    ("TRAIN_BIT_TRANCHE_4", &[TRAIN_BIT_TRANCHE_4_DYNAMIC, TRAIN_BIT_TRANCHE_4_STATIC]),
    ("VAL_BIT_TRANCHE_4", &[VAL_BIT_TRANCHE_4_DYNAMIC, VAL_BIT_TRANCHE_4_STATIC]),
    ("TEST_BIT_TRANCHE_4", &[TEST_BIT_TRANCHE_4_DYNAMIC, TEST_BIT_TRANCHE_4_STATIC]),
    (
        "BIT_TRANCHE_4",
        &[
            TRAIN_BIT_TRANCHE_4_DYNAMIC,
            TRAIN_BIT_TRANCHE_4_STATIC,
            VAL_BIT_TRANCHE_4_DYNAMIC,
            VAL_BIT_TRANCHE_4_STATIC,
            TEST_BIT_TRANCHE_4_DYNAMIC,
            TEST_BIT_TRANCHE_4_STATIC,
        ],
    ),
    ("TRAIN_BIT_TRANCHE_5_DYNAMIC", &[TRAIN_BIT_TRANCHE_5_DYNAMIC]),
    ("VAL_BIT_TRANCHE_5_DYNAMIC", &[VAL_BIT_TRANCHE_5_DYNAMIC]),
    ("TEST_BIT_TRANCHE_5_DYNAMIC", &[TEST_BIT_TRANCHE_5_DYNAMIC]),
    ("TRAIN_BIT_TRANCHE_5_STATIC", &[TRAIN_BIT_TRANCHE_5_STATIC]),
    ("VAL_BIT_TRANCHE_5_STATIC", &[VAL_BIT_TRANCHE_5_STATIC]),
    ("TEST_BIT_TRANCHE_5_STATIC", &[TEST_BIT_TRANCHE_5_STATIC]),
    ("TRAIN_BIT_TRANCHE_5", &[TRAIN_BIT_TRANCHE_5_DYNAMIC, TRAIN_BIT_TRANCHE_5_STATIC]),
    ("VAL_BIT_TRANCHE_5", &[VAL_BIT_TRANCHE_5_DYNAMIC, VAL_BIT_TRANCHE_5_STATIC]),
    ("TEST_BIT_TRANCHE_5", &[TEST_BIT_TRANCHE_5_DYNAMIC, TEST_BIT_TRANCHE_5_STATIC]),
    (
        "BIT_TRANCHE_5",
        &[
            TRAIN_BIT_TRANCHE_5_DYNAMIC,
            TRAIN_BIT_TRANCHE_5_STATIC,
            VAL_BIT_TRANCHE_5_DYNAMIC,
            VAL_BIT_TRANCHE_5_STATIC,
            TEST_BIT_TRANCHE_5_DYNAMIC,
            TEST_BIT_TRANCHE_5_STATIC,
        ],
    ),
    ("MV_TRANCHE_1", &[MV_TRANCHE_1]),
    ("MV_TRANCHE_2", &[MV_TRANCHE_2]),
    ("TRAIN_MV_TRANCHE_4", &[TRAIN_MV_TRANCHE_4]),
    ("VAL_MV_TRANCHE_4", &[VAL_MV_TRANCHE_4]),
    ("TEST_MV_TRANCHE_4", &[TEST_MV_TRANCHE_4]),
    ("MV_TRANCHE_4", &[TRAIN_MV_TRANCHE_4, VAL_MV_TRANCHE_4, TEST_MV_TRANCHE_4]),
    ("TRAIN_MV_TRANCHE_5", &[TRAIN_MV_TRANCHE_5]),
    ("VAL_MV_TRANCHE_5", &[VAL_MV_TRANCHE_5]),
    ("TEST_MV_TRANCHE_5", &[TEST_MV_TRANCHE_5]),
    ("MV_TRANCHE_5", &[TRAIN_MV_TRANCHE_5, VAL_MV_TRANCHE_5, TEST_MV_TRANCHE_5]),
    ("TRAIN_MV_TRANCHE_6", &[TRAIN_MV_TRANCHE_6]),
    ("VAL_MV_TRANCHE_6", &[VAL_MV_TRANCHE_6]),
    ("TEST_MV_TRANCHE_6", &[TEST_MV_TRANCHE_6]),
    ("TEST_MV_TRANCHE_6_DOMAIN_ADAPTATION", &[TEST_MV_TRANCHE_6_DOMAIN_ADAPTATION]),
    (
        "MV_TRANCHE_6",
        &[
            TRAIN_MV_TRANCHE_6,
            VAL_MV_TRANCHE_6,
            TEST_MV_TRANCHE_6,
            TEST_MV_TRANCHE_6_DOMAIN_ADAPTATION,
        ],
    ),
    ("TRAIN_MV_TRANCHE_7", &[TRAIN_MV_TRANCHE_7]),
    ("VAL_MV_TRANCHE_7", &[VAL_MV_TRANCHE_7]),
    ("TEST_MV_TRANCHE_7", &[TEST_MV_TRANCHE_7]),
    ("MV_TRANCHE_7", &[TRAIN_MV_TRANCHE_7, VAL_MV_TRANCHE_7, TEST_MV_TRANCHE_7]),
];

/// Every tranche, for [`create_split`].
const TRANCHES: &[&[&str]] = &[
    BIT_TRANCHE_1,
    TRAIN_BIT_TRANCHE_2,
    VAL_BIT_TRANCHE_2,
    TEST_BIT_TRANCHE_2,
    TRAIN_BIT_TRANCHE_3,
    VAL_BIT_TRANCHE_3,
    TEST_BIT_TRANCHE_3,
    TRAIN_BIT_TRANCHE_4_DYNAMIC,
    TRAIN_BIT_TRANCHE_4_STATIC,
    VAL_BIT_TRANCHE_4_DYNAMIC,
    VAL_BIT_TRANCHE_4_STATIC,
    TEST_BIT_TRANCHE_4_DYNAMIC,
    TEST_BIT_TRANCHE_4_STATIC,
    TRAIN_BIT_TRANCHE_5_DYNAMIC,
    TRAIN_BIT_TRANCHE_5_STATIC,
    VAL_BIT_TRANCHE_5_DYNAMIC,
    VAL_BIT_TRANCHE_5_STATIC,
    TEST_BIT_TRANCHE_5_DYNAMIC,
    TEST_BIT_TRANCHE_5_STATIC,
    MV_TRANCHE_1,
    MV_TRANCHE_2,
    TRAIN_MV_TRANCHE_4,
    VAL_MV_TRANCHE_4,
    TEST_MV_TRANCHE_4,
    TRAIN_MV_TRANCHE_5,
    VAL_MV_TRANCHE_5,
    TEST_MV_TRANCHE_5,
    TRAIN_MV_TRANCHE_6,
    VAL_MV_TRANCHE_6,
    TEST_MV_TRANCHE_6,
    TEST_MV_TRANCHE_6_DOMAIN_ADAPTATION,
    TRAIN_MV_TRANCHE_7,
    VAL_MV_TRANCHE_7,
    TEST_MV_TRANCHE_7,
];

/// Sequences of the split called `name`, e.g. `"TEST_MV_TRANCHE_5"`.
pub fn split(name: &str) -> Option<Vec<&'static str>> {
    SPLITS
        .iter()
        .find(|(split_name, _)| *split_name == name)
        .map(|(_, parts)| parts.concat())
}

pub fn split_names() -> impl Iterator<Item = &'static str> {
    SPLITS.iter().map(|(name, _)| *name)
}

/// The official test split, evaluated when no sequences are configured.
pub fn official_test_split() -> Vec<&'static str> {
    [
        TEST_BIT_TRANCHE_3,
        TEST_BIT_TRANCHE_4_DYNAMIC,
        TEST_BIT_TRANCHE_4_STATIC,
        TEST_BIT_TRANCHE_5_DYNAMIC,
        TEST_BIT_TRANCHE_5_STATIC,
        TEST_MV_TRANCHE_4,
        TEST_MV_TRANCHE_5,
        TEST_MV_TRANCHE_6,
    ]
    .concat()
}

/// Custom split of `company` (`"bit"` or `"mv"`) holding the given
/// sequence numbers, sorted and without duplicates.
pub fn create_split(company: &str, sequence_numbers: &[u32]) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = TRANCHES
        .iter()
        .flat_map(|tranche| tranche.iter().copied())
        .filter(|name| name.starts_with(company))
        .filter(|name| sequence_number(name).is_some_and(|n| sequence_numbers.contains(&n)))
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}

/// `0070` of `bit_results_sequence_0070-8de6...`.
fn sequence_number(name: &str) -> Option<u32> {
    name.split('_')
        .nth(3)
        .and_then(|token| token.get(..4))
        .and_then(|digits| digits.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[test]
    fn test_official_test_split() {
        let names = official_test_split();
        assert_eq!(names.len(), 55);
        assert_eq!(names.iter().collect::<HashSet<_>>().len(), 55);
        assert_eq!(names[0], "bit_results_sequence_0109-564e8af4f42b458caa3aa989dc0e7da1");
        assert_eq!(
            names[54],
            "mv_results_sequence_0076_588681de7605446fb6f68f570227cbfa"
        );
        assert!(!names.contains(&TEST_MV_TRANCHE_6_DOMAIN_ADAPTATION[0]));
    }

    #[rstest]
    #[case::combined_tranche("BIT_TRANCHE_4", 33)]
    #[case::with_domain_adaptation("MV_TRANCHE_6", 18)]
    #[case::empty("TEST_BIT_TRANCHE_4_DYNAMIC", 0)]
    fn test_split_by_name(#[case] name: &str, #[case] expected: usize) {
        assert_eq!(split(name).map(|s| s.len()), Some(expected));
    }

    #[test]
    fn test_unknown_split() {
        assert_eq!(split("TEST_MV_TRANCHE_3"), None);
        assert!(split_names().any(|name| name == "TEST_MV_TRANCHE_7"));
    }

    #[test]
    fn test_create_split() {
        assert_eq!(
            create_split("mv", &[40, 46, 1000]),
            vec![
                "mv_results_sequence_0040_beac809a71b543798474e44bcc61c31d",
                "mv_results_sequence_0046_d564d18e4ec14205ab84707fe9366e5c",
            ]
        );
        assert_eq!(
            create_split("bit", &[1]),
            vec!["bit_results_sequence_0001-ca2bc3fda17b46faa33eb1dbf483d1b9"]
        );
        assert!(create_split("bit", &[]).is_empty());
    }
}
