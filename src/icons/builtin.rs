//! Built-in Font Awesome 3.x icon table.
//!
//! Regenerate with `fa2png --list-update`.

pub(crate) const BUILTIN_ICONS: &[(&str, char)] = &[
    ("adjust", '\u{f042}'),
    ("adn", '\u{f170}'),
    ("align-center", '\u{f037}'),
    ("align-justify", '\u{f039}'),
    ("align-left", '\u{f036}'),
    ("align-right", '\u{f038}'),
    ("ambulance", '\u{f0f9}'),
    ("anchor", '\u{f13d}'),
    ("android", '\u{f17b}'),
    ("angle-down", '\u{f107}'),
    ("angle-left", '\u{f104}'),
    ("angle-right", '\u{f105}'),
    ("angle-up", '\u{f106}'),
    ("apple", '\u{f179}'),
    ("archive", '\u{f187}'),
    ("arrow-down", '\u{f063}'),
    ("arrow-left", '\u{f060}'),
    ("arrow-right", '\u{f061}'),
    ("arrow-up", '\u{f062}'),
    ("asterisk", '\u{f069}'),
    ("backward", '\u{f04a}'),
    ("ban-circle", '\u{f05e}'),
    ("bar-chart", '\u{f080}'),
    ("barcode", '\u{f02a}'),
    ("beaker", '\u{f0c3}'),
    ("beer", '\u{f0fc}'),
    ("bell", '\u{f0a2}'),
    ("bell-alt", '\u{f0f3}'),
    ("bitbucket", '\u{f171}'),
    ("bitbucket-sign", '\u{f172}'),
    ("bitcoin", '\u{f15a}'),
    ("bold", '\u{f032}'),
    ("bolt", '\u{f0e7}'),
    ("book", '\u{f02d}'),
    ("bookmark", '\u{f02e}'),
    ("bookmark-empty", '\u{f097}'),
    ("briefcase", '\u{f0b1}'),
    ("btc", '\u{f15a}'),
    ("bug", '\u{f188}'),
    ("building", '\u{f0f7}'),
    ("bullhorn", '\u{f0a1}'),
    ("bullseye", '\u{f140}'),
    ("calendar", '\u{f073}'),
    ("calendar-empty", '\u{f133}'),
    ("camera", '\u{f030}'),
    ("camera-retro", '\u{f083}'),
    ("caret-down", '\u{f0d7}'),
    ("caret-left", '\u{f0d9}'),
    ("caret-right", '\u{f0da}'),
    ("caret-up", '\u{f0d8}'),
    ("certificate", '\u{f0a3}'),
    ("check", '\u{f046}'),
    ("check-empty", '\u{f096}'),
    ("check-minus", '\u{f147}'),
    ("check-sign", '\u{f14a}'),
    ("chevron-down", '\u{f078}'),
    ("chevron-left", '\u{f053}'),
    ("chevron-right", '\u{f054}'),
    ("chevron-sign-down", '\u{f13a}'),
    ("chevron-sign-left", '\u{f137}'),
    ("chevron-sign-right", '\u{f138}'),
    ("chevron-sign-up", '\u{f139}'),
    ("chevron-up", '\u{f077}'),
    ("circle", '\u{f111}'),
    ("circle-arrow-down", '\u{f0ab}'),
    ("circle-arrow-left", '\u{f0a8}'),
    ("circle-arrow-right", '\u{f0a9}'),
    ("circle-arrow-up", '\u{f0aa}'),
    ("circle-blank", '\u{f10c}'),
    ("cloud", '\u{f0c2}'),
    ("cloud-download", '\u{f0ed}'),
    ("cloud-upload", '\u{f0ee}'),
    ("cny", '\u{f158}'),
    ("code", '\u{f121}'),
    ("code-fork", '\u{f126}'),
    ("coffee", '\u{f0f4}'),
    ("cog", '\u{f013}'),
    ("cogs", '\u{f085}'),
    ("collapse", '\u{f150}'),
    ("collapse-alt", '\u{f117}'),
    ("collapse-top", '\u{f151}'),
    ("columns", '\u{f0db}'),
    ("comment", '\u{f075}'),
    ("comment-alt", '\u{f0e5}'),
    ("comments", '\u{f086}'),
    ("comments-alt", '\u{f0e6}'),
    ("compass", '\u{f14e}'),
    ("copy", '\u{f0c5}'),
    ("credit-card", '\u{f09d}'),
    ("crop", '\u{f125}'),
    ("css3", '\u{f13c}'),
    ("cut", '\u{f0c4}'),
    ("dashboard", '\u{f0e4}'),
    ("desktop", '\u{f108}'),
    ("dollar", '\u{f155}'),
    ("double-angle-down", '\u{f103}'),
    ("double-angle-left", '\u{f100}'),
    ("double-angle-right", '\u{f101}'),
    ("double-angle-up", '\u{f102}'),
    ("download", '\u{f01a}'),
    ("download-alt", '\u{f019}'),
    ("dribbble", '\u{f17d}'),
    ("dropbox", '\u{f16b}'),
    ("edit", '\u{f044}'),
    ("edit-sign", '\u{f14b}'),
    ("eject", '\u{f052}'),
    ("ellipsis-horizontal", '\u{f141}'),
    ("ellipsis-vertical", '\u{f142}'),
    ("envelope", '\u{f0e0}'),
    ("envelope-alt", '\u{f003}'),
    ("eraser", '\u{f12d}'),
    ("eur", '\u{f153}'),
    ("euro", '\u{f153}'),
    ("exchange", '\u{f0ec}'),
    ("exclamation", '\u{f12a}'),
    ("exclamation-sign", '\u{f06a}'),
    ("expand", '\u{f152}'),
    ("expand-alt", '\u{f116}'),
    ("external-link", '\u{f08e}'),
    ("external-link-sign", '\u{f14c}'),
    ("eye-close", '\u{f070}'),
    ("eye-open", '\u{f06e}'),
    ("facebook", '\u{f09a}'),
    ("facebook-sign", '\u{f082}'),
    ("facetime-video", '\u{f03d}'),
    ("fast-backward", '\u{f049}'),
    ("fast-forward", '\u{f050}'),
    ("female", '\u{f182}'),
    ("fighter-jet", '\u{f0fb}'),
    ("file", '\u{f15b}'),
    ("file-alt", '\u{f016}'),
    ("file-text", '\u{f15c}'),
    ("file-text-alt", '\u{f0f6}'),
    ("film", '\u{f008}'),
    ("filter", '\u{f0b0}'),
    ("fire", '\u{f06d}'),
    ("fire-extinguisher", '\u{f134}'),
    ("flag", '\u{f024}'),
    ("flag-alt", '\u{f11d}'),
    ("flag-checkered", '\u{f11e}'),
    ("flickr", '\u{f16e}'),
    ("folder-close", '\u{f07b}'),
    ("folder-close-alt", '\u{f114}'),
    ("folder-open", '\u{f07c}'),
    ("folder-open-alt", '\u{f115}'),
    ("font", '\u{f031}'),
    ("food", '\u{f0f5}'),
    ("forward", '\u{f04e}'),
    ("foursquare", '\u{f180}'),
    ("frown", '\u{f119}'),
    ("fullscreen", '\u{f0b2}'),
    ("gamepad", '\u{f11b}'),
    ("gbp", '\u{f154}'),
    ("gear", '\u{f013}'),
    ("gears", '\u{f085}'),
    ("gift", '\u{f06b}'),
    ("github", '\u{f09b}'),
    ("github-alt", '\u{f113}'),
    ("github-sign", '\u{f092}'),
    ("gittip", '\u{f184}'),
    ("glass", '\u{f000}'),
    ("globe", '\u{f0ac}'),
    ("google-plus", '\u{f0d5}'),
    ("google-plus-sign", '\u{f0d4}'),
    ("group", '\u{f0c0}'),
    ("h-sign", '\u{f0fd}'),
    ("hand-down", '\u{f0a7}'),
    ("hand-left", '\u{f0a5}'),
    ("hand-right", '\u{f0a4}'),
    ("hand-up", '\u{f0a6}'),
    ("hdd", '\u{f0a0}'),
    ("headphones", '\u{f025}'),
    ("heart", '\u{f004}'),
    ("heart-empty", '\u{f08a}'),
    ("home", '\u{f015}'),
    ("hospital", '\u{f0f8}'),
    ("html5", '\u{f13b}'),
    ("inbox", '\u{f01c}'),
    ("indent-left", '\u{f03b}'),
    ("indent-right", '\u{f03c}'),
    ("info", '\u{f129}'),
    ("info-sign", '\u{f05a}'),
    ("inr", '\u{f156}'),
    ("instagram", '\u{f16d}'),
    ("italic", '\u{f033}'),
    ("jpy", '\u{f157}'),
    ("key", '\u{f084}'),
    ("keyboard", '\u{f11c}'),
    ("krw", '\u{f159}'),
    ("laptop", '\u{f109}'),
    ("leaf", '\u{f06c}'),
    ("legal", '\u{f0e3}'),
    ("lemon", '\u{f094}'),
    ("level-down", '\u{f149}'),
    ("level-up", '\u{f148}'),
    ("lightbulb", '\u{f0eb}'),
    ("link", '\u{f0c1}'),
    ("linkedin", '\u{f0e1}'),
    ("linkedin-sign", '\u{f08c}'),
    ("linux", '\u{f17c}'),
    ("list", '\u{f03a}'),
    ("list-alt", '\u{f022}'),
    ("list-ol", '\u{f0cb}'),
    ("list-ul", '\u{f0ca}'),
    ("location-arrow", '\u{f124}'),
    ("lock", '\u{f023}'),
    ("long-arrow-down", '\u{f175}'),
    ("long-arrow-left", '\u{f177}'),
    ("long-arrow-right", '\u{f178}'),
    ("long-arrow-up", '\u{f176}'),
    ("magic", '\u{f0d0}'),
    ("magnet", '\u{f076}'),
    ("mail-forward", '\u{f064}'),
    ("mail-reply", '\u{f112}'),
    ("mail-reply-all", '\u{f122}'),
    ("male", '\u{f183}'),
    ("map-marker", '\u{f041}'),
    ("maxcdn", '\u{f136}'),
    ("medkit", '\u{f0fa}'),
    ("meh", '\u{f11a}'),
    ("microphone", '\u{f130}'),
    ("microphone-off", '\u{f131}'),
    ("minus", '\u{f068}'),
    ("minus-sign", '\u{f056}'),
    ("minus-sign-alt", '\u{f146}'),
    ("mobile-phone", '\u{f10b}'),
    ("money", '\u{f0d6}'),
    ("moon", '\u{f186}'),
    ("move", '\u{f047}'),
    ("music", '\u{f001}'),
    ("off", '\u{f011}'),
    ("ok", '\u{f00c}'),
    ("ok-circle", '\u{f05d}'),
    ("ok-sign", '\u{f058}'),
    ("paper-clip", '\u{f0c6}'),
    ("paperclip", '\u{f0c6}'),
    ("paste", '\u{f0ea}'),
    ("pause", '\u{f04c}'),
    ("pencil", '\u{f040}'),
    ("phone", '\u{f095}'),
    ("phone-sign", '\u{f098}'),
    ("picture", '\u{f03e}'),
    ("pinterest", '\u{f0d2}'),
    ("pinterest-sign", '\u{f0d3}'),
    ("plane", '\u{f072}'),
    ("play", '\u{f04b}'),
    ("play-circle", '\u{f01d}'),
    ("play-sign", '\u{f144}'),
    ("plus", '\u{f067}'),
    ("plus-sign", '\u{f055}'),
    ("plus-sign-alt", '\u{f0fe}'),
    ("power-off", '\u{f011}'),
    ("print", '\u{f02f}'),
    ("pushpin", '\u{f08d}'),
    ("puzzle-piece", '\u{f12e}'),
    ("qrcode", '\u{f029}'),
    ("question", '\u{f128}'),
    ("question-sign", '\u{f059}'),
    ("quote-left", '\u{f10d}'),
    ("quote-right", '\u{f10e}'),
    ("random", '\u{f074}'),
    ("refresh", '\u{f021}'),
    ("remove", '\u{f00d}'),
    ("remove-circle", '\u{f05c}'),
    ("remove-sign", '\u{f057}'),
    ("renminbi", '\u{f158}'),
    ("renren", '\u{f18b}'),
    ("reorder", '\u{f0c9}'),
    ("repeat", '\u{f01e}'),
    ("reply", '\u{f112}'),
    ("reply-all", '\u{f122}'),
    ("resize-full", '\u{f065}'),
    ("resize-horizontal", '\u{f07e}'),
    ("resize-small", '\u{f066}'),
    ("resize-vertical", '\u{f07d}'),
    ("retweet", '\u{f079}'),
    ("road", '\u{f018}'),
    ("rocket", '\u{f135}'),
    ("rotate-left", '\u{f0e2}'),
    ("rotate-right", '\u{f01e}'),
    ("rss", '\u{f09e}'),
    ("rss-sign", '\u{f143}'),
    ("rupee", '\u{f156}'),
    ("save", '\u{f0c7}'),
    ("screenshot", '\u{f05b}'),
    ("search", '\u{f002}'),
    ("share", '\u{f045}'),
    ("share-alt", '\u{f064}'),
    ("share-sign", '\u{f14d}'),
    ("shield", '\u{f132}'),
    ("shopping-cart", '\u{f07a}'),
    ("sign-blank", '\u{f0c8}'),
    ("signal", '\u{f012}'),
    ("signin", '\u{f090}'),
    ("signout", '\u{f08b}'),
    ("sitemap", '\u{f0e8}'),
    ("skype", '\u{f17e}'),
    ("smile", '\u{f118}'),
    ("sort", '\u{f0dc}'),
    ("sort-by-alphabet", '\u{f15d}'),
    ("sort-by-alphabet-alt", '\u{f15e}'),
    ("sort-by-attributes", '\u{f160}'),
    ("sort-by-attributes-alt", '\u{f161}'),
    ("sort-by-order", '\u{f162}'),
    ("sort-by-order-alt", '\u{f163}'),
    ("sort-down", '\u{f0dd}'),
    ("sort-up", '\u{f0de}'),
    ("spinner", '\u{f110}'),
    ("stackexchange", '\u{f16c}'),
    ("star", '\u{f005}'),
    ("star-empty", '\u{f006}'),
    ("star-half", '\u{f089}'),
    ("star-half-empty", '\u{f123}'),
    ("star-half-full", '\u{f123}'),
    ("step-backward", '\u{f048}'),
    ("step-forward", '\u{f051}'),
    ("stethoscope", '\u{f0f1}'),
    ("stop", '\u{f04d}'),
    ("strikethrough", '\u{f0cc}'),
    ("subscript", '\u{f12c}'),
    ("suitcase", '\u{f0f2}'),
    ("sun", '\u{f185}'),
    ("superscript", '\u{f12b}'),
    ("table", '\u{f0ce}'),
    ("tablet", '\u{f10a}'),
    ("tag", '\u{f02b}'),
    ("tags", '\u{f02c}'),
    ("tasks", '\u{f0ae}'),
    ("terminal", '\u{f120}'),
    ("text-height", '\u{f034}'),
    ("text-width", '\u{f035}'),
    ("th", '\u{f00a}'),
    ("th-large", '\u{f009}'),
    ("th-list", '\u{f00b}'),
    ("thumbs-down", '\u{f165}'),
    ("thumbs-down-alt", '\u{f088}'),
    ("thumbs-up", '\u{f164}'),
    ("thumbs-up-alt", '\u{f087}'),
    ("ticket", '\u{f145}'),
    ("time", '\u{f017}'),
    ("tint", '\u{f043}'),
    ("trash", '\u{f014}'),
    ("trello", '\u{f181}'),
    ("trophy", '\u{f091}'),
    ("truck", '\u{f0d1}'),
    ("tumblr", '\u{f173}'),
    ("tumblr-sign", '\u{f174}'),
    ("twitter", '\u{f099}'),
    ("twitter-sign", '\u{f081}'),
    ("umbrella", '\u{f0e9}'),
    ("unchecked", '\u{f096}'),
    ("underline", '\u{f0cd}'),
    ("undo", '\u{f0e2}'),
    ("unlink", '\u{f127}'),
    ("unlock", '\u{f09c}'),
    ("unlock-alt", '\u{f13e}'),
    ("upload", '\u{f01b}'),
    ("upload-alt", '\u{f093}'),
    ("usd", '\u{f155}'),
    ("user", '\u{f007}'),
    ("user-md", '\u{f0f0}'),
    ("vk", '\u{f189}'),
    ("volume-down", '\u{f027}'),
    ("volume-off", '\u{f026}'),
    ("volume-up", '\u{f028}'),
    ("warning-sign", '\u{f071}'),
    ("weibo", '\u{f18a}'),
    ("windows", '\u{f17a}'),
    ("won", '\u{f159}'),
    ("wrench", '\u{f0ad}'),
    ("xing", '\u{f168}'),
    ("xing-sign", '\u{f169}'),
    ("yen", '\u{f157}'),
    ("youtube", '\u{f167}'),
    ("youtube-play", '\u{f16a}'),
    ("youtube-sign", '\u{f166}'),
    ("zoom-in", '\u{f00e}'),
    ("zoom-out", '\u{f010}'),
];
