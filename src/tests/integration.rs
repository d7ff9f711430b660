#[cfg(test)]
mod integration_tests {

    use crate::{
        KanaConverter,
        dictionary::{Direction, build},
        initialize,
        pattern::compile,
        pipeline::{Pipeline, pre_processing},
        stage::{
            lower_case::LowerCase,
            phonetic::{labial_nasal, long_vowel, small_tsu},
        },
        substitute::substitute,
        table::data::{HIRAGANA, ROMAJI, ROMAJI_ASSIST},
    };
    use std::borrow::Cow;

    #[test]
    fn every_romaji_key_round_trips_through_katakana() {
        let kc = initialize().unwrap();
        for (key, _) in ROMAJI.entries().chain(ROMAJI_ASSIST.entries()) {
            let kana = kc.romaji_to_katakana(key).into_owned();
            let back = kc.katakana_to_romaji(&kana).into_owned();
            assert_eq!(
                kc.romaji_to_katakana(&back),
                kana,
                "`{key}` → `{kana}` → `{back}` does not read back"
            );
        }
    }

    #[test]
    fn hepburn_keys_round_trip_exactly() {
        let kc = initialize().unwrap();
        for key in [
            "ka", "shi", "chi", "tsu", "fu", "ji", "kya", "sha", "cha", "ja", "ryo", "wo", "n",
            "fa", "thi", "ye", "wi", "kwa",
        ] {
            let kana = kc.romaji_to_katakana(key);
            assert_eq!(kc.katakana_to_romaji(&kana), key, "via `{kana}`");
        }
    }

    #[test]
    fn kunrei_spellings_read_as_hepburn() {
        let kc = initialize().unwrap();
        let cases = [("si", "shi"), ("ti", "chi"), ("tu", "tsu"), ("hu", "fu"), ("zi", "ji")];
        for (kunrei, hepburn) in cases {
            let kana = kc.romaji_to_katakana(kunrei);
            assert_eq!(kc.katakana_to_romaji(&kana), hepburn);
        }
    }

    #[test]
    fn every_hiragana_round_trips_through_katakana() {
        let kc = initialize().unwrap();
        for (hira, kata) in HIRAGANA.entries() {
            assert_eq!(kc.hiragana_to_katakana(hira), *kata);
            assert_eq!(kc.katakana_to_hiragana(kata), *hira);
        }
    }

    #[test]
    fn words_round_trip_through_all_scripts() {
        let kc = initialize().unwrap();
        let words = [
            ("ガッコウ", "がっこう", "gakkō"),
            ("シンブン", "しんぶん", "shinbun"),
            ("マッチャ", "まっちゃ", "matcha"),
            ("キョウト", "きょうと", "kyōto"),
            ("ザッシ", "ざっし", "zasshi"),
            ("ラーメン", "らーめん", "rāmen"),
        ];
        for (kata, hira, romaji) in words {
            assert_eq!(kc.katakana_to_hiragana(kata), hira);
            assert_eq!(kc.hiragana_to_katakana(hira), kata);
            assert_eq!(kc.katakana_to_romaji(kata), romaji);
            assert_eq!(kc.hiragana_to_romaji(hira), romaji);
        }
    }

    #[test]
    fn macron_romaji_reads_back_as_long_vowel_mark() {
        let kc = initialize().unwrap();
        assert_eq!(kc.romaji_to_katakana("rāmen"), "ラーメン");
        assert_eq!(kc.romaji_to_katakana("kōhī"), "コーヒー");
        assert_eq!(kc.romaji_to_hiragana("TŌKYŌ"), "とーきょー");
    }

    #[test]
    fn phonetic_pipeline_order_matters_for_geminates() {
        let (table, keys) = build(&ROMAJI, &ROMAJI_ASSIST, Direction::Forward);
        let pattern = compile(&keys).unwrap();
        let to_katakana = |pipeline: &Pipeline, text: &str| {
            let pre = pipeline.process(Cow::Borrowed(text));
            substitute(&pattern, &table, &pre).into_owned()
        };

        let in_order = pre_processing().unwrap();
        let reordered = Pipeline::new()
            .push(LowerCase)
            .push(small_tsu().unwrap())
            .push(labial_nasal().unwrap())
            .push(long_vowel().unwrap());

        assert_eq!(to_katakana(&in_order, "sammai"), "サンマイ");
        assert_eq!(to_katakana(&reordered, "sammai"), "サッマイ");
    }

    #[test]
    fn converter_is_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KanaConverter>();

        let kc = initialize().unwrap();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        (0..100)
                            .map(|_| kc.romaji_to_hiragana("gakkou").into_owned())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            for handle in handles {
                let results = handle.join().unwrap();
                assert!(results.iter().all(|r| r == "がっこう"));
            }
        });
    }

    #[test]
    fn converters_built_twice_agree() {
        let first = initialize().unwrap();
        let second = initialize().unwrap();
        let text = "kyōto no gakkou de matcha wo nomu";
        assert_eq!(first.romaji_to_katakana(text), second.romaji_to_katakana(text));
    }
}
