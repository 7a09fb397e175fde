use _model::Record;

/// The 200 largest Japanese companies by market capitalisation, in rank order.
/// Queries use the Japanese trading name so the geocoder finds the head office.
pub static RECORDS: &[Record<'static>] = &[
    Record::new("Toyota Motor", "トヨタ自動車 本社"),
    Record::new("Mitsubishi UFJ Financial Group", "三菱UFJフィナンシャル・グループ 本社"),
    Record::new("Sony Group", "ソニーグループ 本社"),
    Record::new("Hitachi", "日立製作所 本社"),
    Record::new("Fast Retailing", "ファーストリテイリング 本社"),
    Record::new("Sumitomo Mitsui Financial Group", "三井住友フィナンシャルグループ 本社"),
    Record::new("Keyence", "キーエンス 本社"),
    Record::new("Recruit Holdings", "リクルートホールディングス 本社"),
    Record::new("Nintendo", "任天堂 本社"),
    Record::new("Tokyo Electron", "東京エレクトロン 本社"),
    Record::new("Mitsubishi Corporation", "三菱商事 本社"),
    Record::new("SoftBank Group", "ソフトバンクグループ 本社"),
    Record::new("Mizuho Financial Group", "みずほフィナンシャルグループ 本社"),
    Record::new("Tokio Marine Holdings", "東京海上ホールディングス 本社"),
    Record::new("Shin-Etsu Chemical", "信越化学工業 本社"),
    Record::new("Mitsui & Co.", "三井物産 本社"),
    Record::new("Itochu", "伊藤忠商事 本社"),
    Record::new("Chugai Pharmaceutical", "中外製薬 本社"),
    Record::new("KDDI", "KDDI 本社"),
    Record::new("Daiichi Sankyo", "第一三共 本社"),
    Record::new("NTT", "日本電信電話 本社"),
    Record::new("Honda Motor", "本田技研工業 本社"),
    Record::new("SoftBank Corp.", "ソフトバンク 本社"),
    Record::new("Mitsubishi Heavy Industries", "三菱重工業 本社"),
    Record::new("Takeda Pharmaceutical", "武田薬品工業 本社"),
    Record::new("Hoya", "HOYA 本社"),
    Record::new("Advantest", "アドバンテスト 本社"),
    Record::new("Fujitsu", "富士通 本社"),
    Record::new("Mitsubishi Electric", "三菱電機 本社"),
    Record::new("Seven & i Holdings", "セブン&アイ・ホールディングス 本社"),
    Record::new("Japan Tobacco", "日本たばこ産業 本社"),
    Record::new("Denso", "デンソー 本社"),
    Record::new("Oriental Land", "オリエンタルランド 本社"),
    Record::new("Marubeni", "丸紅 本社"),
    Record::new("Daikin Industries", "ダイキン工業 本社"),
    Record::new("Japan Post Bank", "ゆうちょ銀行 本社"),
    Record::new("Murata Manufacturing", "村田製作所 本社"),
    Record::new("Fanuc", "ファナック 本社"),
    Record::new("Nippon Steel", "日本製鉄 本社"),
    Record::new("Canon", "キヤノン 本社"),
    Record::new("Sumitomo Corporation", "住友商事 本社"),
    Record::new("Astellas Pharma", "アステラス製薬 本社"),
    Record::new("Japan Post Holdings", "日本郵政 本社"),
    Record::new("Terumo", "テルモ 本社"),
    Record::new("Mitsui Fudosan", "三井不動産 本社"),
    Record::new("ORIX", "オリックス 本社"),
    Record::new("Bridgestone", "ブリヂストン 本社"),
    Record::new("Panasonic Holdings", "パナソニック ホールディングス 本社"),
    Record::new("Kao", "花王 本社"),
    Record::new("SMC", "SMC 本社"),
    Record::new("Dai-ichi Life Holdings", "第一生命ホールディングス 本社"),
    Record::new("MS&AD Insurance Group Holdings", "MS&ADインシュアランスグループホールディングス 本社"),
    Record::new("Sompo Holdings", "SOMPOホールディングス 本社"),
    Record::new("Fujifilm Holdings", "富士フイルムホールディングス 本社"),
    Record::new("Nomura Holdings", "野村ホールディングス 本社"),
    Record::new("Otsuka Holdings", "大塚ホールディングス 本社"),
    Record::new("Mitsubishi Estate", "三菱地所 本社"),
    Record::new("Resona Holdings", "りそなホールディングス 本社"),
    Record::new("East Japan Railway", "東日本旅客鉄道 本社"),
    Record::new("Central Japan Railway", "東海旅客鉄道 本社"),
    Record::new("Shionogi", "塩野義製薬 本社"),
    Record::new("Disco", "ディスコ 本社"),
    Record::new("Renesas Electronics", "ルネサスエレクトロニクス 本社"),
    Record::new("Lasertec", "レーザーテック 本社"),
    Record::new("Kirin Holdings", "キリンホールディングス 本社"),
    Record::new("Asahi Group Holdings", "アサヒグループホールディングス 本社"),
    Record::new("Suzuki Motor", "スズキ 本社"),
    Record::new("Nissan Motor", "日産自動車 本社"),
    Record::new("Subaru", "SUBARU 本社"),
    Record::new("Toyota Industries", "豊田自動織機 本社"),
    Record::new("Toyota Tsusho", "豊田通商 本社"),
    Record::new("Komatsu", "小松製作所 本社"),
    Record::new("Kubota", "クボタ 本社"),
    Record::new("Daiwa House Industry", "大和ハウス工業 本社"),
    Record::new("Sekisui House", "積水ハウス 本社"),
    Record::new("Ajinomoto", "味の素 本社"),
    Record::new("Unicharm", "ユニ・チャーム 本社"),
    Record::new("Shiseido", "資生堂 本社"),
    Record::new("Eisai", "エーザイ 本社"),
    Record::new("Olympus", "オリンパス 本社"),
    Record::new("Sysmex", "シスメックス 本社"),
    Record::new("Nidec", "ニデック 本社"),
    Record::new("Kyocera", "京セラ 本社"),
    Record::new("TDK", "TDK 本社"),
    Record::new("Ibiden", "イビデン 本社"),
    Record::new("Nitto Denko", "日東電工 本社"),
    Record::new("Sumitomo Realty & Development", "住友不動産 本社"),
    Record::new("Sumitomo Mitsui Trust Holdings", "三井住友トラスト・ホールディングス 本社"),
    Record::new("Daiwa Securities Group", "大和証券グループ 本社"),
    Record::new("Japan Exchange Group", "日本取引所グループ 本社"),
    Record::new("Nomura Research Institute", "野村総合研究所 本社"),
    Record::new("NEC", "日本電気 本社"),
    Record::new("Obic", "オービック 本社"),
    Record::new("Trend Micro", "トレンドマイクロ 本社"),
    Record::new("Nitori Holdings", "ニトリホールディングス 本社"),
    Record::new("Aeon", "イオン 本社"),
    Record::new("Pan Pacific International Holdings", "パン・パシフィック・インターナショナルホールディングス 本社"),
    Record::new("LY Corporation", "LINEヤフー 本社"),
    Record::new("Rakuten Group", "楽天グループ 本社"),
    Record::new("Mercari", "メルカリ 本社"),
    Record::new("Nexon", "ネクソン 本社"),
    Record::new("Bandai Namco Holdings", "バンダイナムコホールディングス 本社"),
    Record::new("Capcom", "カプコン 本社"),
    Record::new("Konami Group", "コナミグループ 本社"),
    Record::new("Square Enix Holdings", "スクウェア・エニックス・ホールディングス 本社"),
    Record::new("Sega Sammy Holdings", "セガサミーホールディングス 本社"),
    Record::new("Toho", "東宝 本社"),
    Record::new("Yamaha Motor", "ヤマハ発動機 本社"),
    Record::new("Yamaha", "ヤマハ 本社"),
    Record::new("Mazda Motor", "マツダ 本社"),
    Record::new("Isuzu Motors", "いすゞ自動車 本社"),
    Record::new("Aisin", "アイシン 本社"),
    Record::new("Sumitomo Electric Industries", "住友電気工業 本社"),
    Record::new("Sumitomo Metal Mining", "住友金属鉱山 本社"),
    Record::new("JFE Holdings", "JFEホールディングス 本社"),
    Record::new("ENEOS Holdings", "ENEOSホールディングス 本社"),
    Record::new("Inpex", "INPEX 本社"),
    Record::new("Idemitsu Kosan", "出光興産 本社"),
    Record::new("Tokyo Gas", "東京ガス 本社"),
    Record::new("Osaka Gas", "大阪ガス 本社"),
    Record::new("Kansai Electric Power", "関西電力 本社"),
    Record::new("Chubu Electric Power", "中部電力 本社"),
    Record::new("Tokyo Electric Power Company Holdings", "東京電力ホールディングス 本社"),
    Record::new("West Japan Railway", "西日本旅客鉄道 本社"),
    Record::new("Hankyu Hanshin Holdings", "阪急阪神ホールディングス 本社"),
    Record::new("Tokyu", "東急 本社"),
    Record::new("Odakyu Electric Railway", "小田急電鉄 本社"),
    Record::new("Keio Corporation", "京王電鉄 本社"),
    Record::new("ANA Holdings", "ANAホールディングス 本社"),
    Record::new("Japan Airlines", "日本航空 本社"),
    Record::new("Nippon Yusen", "日本郵船 本社"),
    Record::new("Mitsui O.S.K. Lines", "商船三井 本社"),
    Record::new("Kawasaki Kisen Kaisha", "川崎汽船 本社"),
    Record::new("Yamato Holdings", "ヤマトホールディングス 本社"),
    Record::new("Nippon Paint Holdings", "日本ペイントホールディングス 本社"),
    Record::new("Asahi Kasei", "旭化成 本社"),
    Record::new("Toray Industries", "東レ 本社"),
    Record::new("Mitsubishi Chemical Group", "三菱ケミカルグループ 本社"),
    Record::new("Sumitomo Chemical", "住友化学 本社"),
    Record::new("Mitsui Chemicals", "三井化学 本社"),
    Record::new("Sekisui Chemical", "積水化学工業 本社"),
    Record::new("AGC", "AGC 本社"),
    Record::new("Kikkoman", "キッコーマン 本社"),
    Record::new("Meiji Holdings", "明治ホールディングス 本社"),
    Record::new("Yakult Honsha", "ヤクルト本社 本社"),
    Record::new("Suntory Beverage & Food", "サントリー食品インターナショナル 本社"),
    Record::new("Nissin Foods Holdings", "日清食品ホールディングス 本社"),
    Record::new("Kobe Bussan", "神戸物産 本社"),
    Record::new("Lawson", "ローソン 本社"),
    Record::new("Ryohin Keikaku", "良品計画 本社"),
    Record::new("Shimano", "シマノ 本社"),
    Record::new("Makita", "マキタ 本社"),
    Record::new("Yaskawa Electric", "安川電機 本社"),
    Record::new("Omron", "オムロン 本社"),
    Record::new("Hamamatsu Photonics", "浜松ホトニクス 本社"),
    Record::new("Screen Holdings", "SCREENホールディングス 本社"),
    Record::new("Kokusai Electric", "KOKUSAI ELECTRIC 本社"),
    Record::new("Socionext", "ソシオネクスト 本社"),
    Record::new("Rohm", "ローム 本社"),
    Record::new("Shimadzu", "島津製作所 本社"),
    Record::new("Keisei Electric Railway", "京成電鉄 本社"),
    Record::new("Tobu Railway", "東武鉄道 本社"),
    Record::new("Kintetsu Group Holdings", "近鉄グループホールディングス 本社"),
    Record::new("Japan Post Insurance", "かんぽ生命保険 本社"),
    Record::new("T&D Holdings", "T&Dホールディングス 本社"),
    Record::new("Concordia Financial Group", "コンコルディア・フィナンシャルグループ 本社"),
    Record::new("Chiba Bank", "千葉銀行 本社"),
    Record::new("Shizuoka Financial Group", "しずおかフィナンシャルグループ 本社"),
    Record::new("Fukuoka Financial Group", "ふくおかフィナンシャルグループ 本社"),
    Record::new("SBI Holdings", "SBIホールディングス 本社"),
    Record::new("Mitsubishi HC Capital", "三菱HCキャピタル 本社"),
    Record::new("Credit Saison", "クレディセゾン 本社"),
    Record::new("Acom", "アコム 本社"),
    Record::new("Dentsu Group", "電通グループ 本社"),
    Record::new("Hakuhodo DY Holdings", "博報堂DYホールディングス 本社"),
    Record::new("CyberAgent", "サイバーエージェント 本社"),
    Record::new("M3", "エムスリー 本社"),
    Record::new("NTT Data Group", "NTTデータグループ 本社"),
    Record::new("SCSK", "SCSK 本社"),
    Record::new("TIS", "TIS 本社"),
    Record::new("BayCurrent", "ベイカレント 本社"),
    Record::new("Otsuka Corporation", "大塚商会 本社"),
    Record::new("Kajima", "鹿島建設 本社"),
    Record::new("Obayashi", "大林組 本社"),
    Record::new("Taisei", "大成建設 本社"),
    Record::new("Shimizu", "清水建設 本社"),
    Record::new("Sumitomo Forestry", "住友林業 本社"),
    Record::new("Daito Trust Construction", "大東建託 本社"),
    Record::new("Nomura Real Estate Holdings", "野村不動産ホールディングス 本社"),
    Record::new("Hulic", "ヒューリック 本社"),
    Record::new("Secom", "セコム 本社"),
    Record::new("Toto", "TOTO 本社"),
    Record::new("Lixil", "LIXIL 本社"),
    Record::new("Yokogawa Electric", "横河電機 本社"),
    Record::new("Hitachi Construction Machinery", "日立建機 本社"),
    Record::new("Kawasaki Heavy Industries", "川崎重工業 本社"),
    Record::new("IHI", "IHI 本社"),
    Record::new("Mitsubishi Motors", "三菱自動車工業 本社"),
    Record::new("Koito Manufacturing", "小糸製作所 本社"),
    Record::new("Kyowa Kirin", "協和キリン 本社"),
];
