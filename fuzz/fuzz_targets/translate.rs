#![no_main]

use jvm_translator::{jvm::class_loader::KnownClasses, translator::Translator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|declaration: &str| {
    let translator = Translator::new(KnownClasses::java_lang());
    let _ = translator.translate_type(declaration);
    let _ = translator.translate_field(declaration);
    let _ = translator.translate_method(declaration);
});
